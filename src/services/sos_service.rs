use crate::models::{Coordinates, SosRequest, SosResponse};
use crate::utils::PATH_SOS_TRIGGER;
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// Single attempt, no retry. A reply that cannot be read as `SosResponse`
/// comes back as `ApiError::Decode`.
pub async fn trigger_sos(
    client: &ApiClient,
    location: &Coordinates,
    token: Option<&str>,
) -> Result<SosResponse, ApiError> {
    log::warn!("🆘 Enviando SOS desde ({:.6}, {:.6})", location.latitude, location.longitude);
    let request = ApiRequest::post(PATH_SOS_TRIGGER)
        .token(token)
        .json(&SosRequest {
            latitude: location.latitude,
            longitude: location.longitude,
        })?;
    client.call(request).await
}
