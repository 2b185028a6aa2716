use crate::models::{Credentials, TokenResponse, User};
use crate::utils::{PATH_AUTH_LOGIN, PATH_AUTH_REGISTER};
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// Exchange email + password for a bearer token
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    log::info!("🔐 Iniciando sesión: {}", email);
    let request = ApiRequest::post(PATH_AUTH_LOGIN)
        .anonymous()
        .json(&Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })?;
    let response: TokenResponse = client.call(request).await?;
    log::info!("✅ Token recibido ({})", response.token_type);
    Ok(response)
}

/// Create an account; the backend does not log the user in
pub async fn register(client: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    log::info!("📝 Registrando cuenta: {}", email);
    let request = ApiRequest::post(PATH_AUTH_REGISTER)
        .anonymous()
        .json(&Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })?;
    client.call(request).await
}
