use serde_json::Value;

use crate::models::ContactsPayload;
use crate::utils::PATH_EMERGENCY_CONTACTS;
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// Mirror the emergency contact phones to the backend
pub async fn update_emergency_contacts(
    client: &ApiClient,
    payload: &ContactsPayload,
    token: Option<&str>,
) -> Result<(), ApiError> {
    log::info!("📇 Sincronizando contactos de emergencia...");
    let request = ApiRequest::post(PATH_EMERGENCY_CONTACTS)
        .token(token)
        .json(payload)?;
    let _: Value = client.call(request).await?;
    Ok(())
}
