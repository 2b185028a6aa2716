// ============================================================================
// AUTH VIEWMODEL - login, registro y reglas de contraseña
// ============================================================================

use thiserror::Error;

use crate::models::demo::{DEMO_EMAIL, DEMO_TOKEN};
use crate::models::User;
use crate::services::{auth_service, ApiClient, ApiError};
use crate::utils::MIN_PASSWORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be at least 6 characters and contain a number.")]
    Weak,
    #[error("Please make sure your passwords match.")]
    Mismatch,
}

impl PasswordError {
    pub fn title(&self) -> &'static str {
        match self {
            PasswordError::Weak => "Weak password",
            PasswordError::Mismatch => "Passwords don't match",
        }
    }
}

/// Live checklist shown under the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub has_number: bool,
    pub matches: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str, confirmation: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            matches: !confirmation.is_empty() && password == confirmation,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.min_length && self.has_number
    }
}

pub fn validate_password(password: &str, confirmation: &str) -> Result<(), PasswordError> {
    let checks = PasswordChecks::evaluate(password, confirmation);
    if !checks.is_strong() {
        return Err(PasswordError::Weak);
    }
    if !checks.matches {
        return Err(PasswordError::Mismatch);
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Demo account, no backend involved
pub fn demo_credentials() -> (User, String) {
    (User::from_email(DEMO_EMAIL), DEMO_TOKEN.to_string())
}

pub struct AuthViewModel {
    api_client: ApiClient,
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// User and token ready for the session store
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), ApiError> {
        let response = auth_service::login(&self.api_client, email.trim(), password).await?;
        let user = response
            .user
            .unwrap_or_else(|| User::from_email(email.trim()));
        Ok((user, response.access_token))
    }

    /// Registration does not sign the user in; they go back to the login screen.
    pub async fn register(&self, email: &str, password: &str, confirmation: &str) -> Result<User, RegisterError> {
        validate_password(password, confirmation)?;
        Ok(auth_service::register(&self.api_client, email.trim(), password).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn password_rules() {
        assert_eq!(validate_password("abc12", "abc12"), Err(PasswordError::Weak));
        assert_eq!(validate_password("abcdef", "abcdef"), Err(PasswordError::Weak));
        assert_eq!(validate_password("abcde1", ""), Err(PasswordError::Mismatch));
        assert_eq!(validate_password("abcde1", "abcde2"), Err(PasswordError::Mismatch));
        assert_eq!(validate_password("abcde1", "abcde1"), Ok(()));

        let checks = PasswordChecks::evaluate("secret9", "");
        assert!(checks.is_strong());
        assert!(!checks.matches);
    }

    #[test]
    fn token_only_login_synthesises_user() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"access_token":"jwt","token_type":"bearer"}"#);
        let vm = AuthViewModel::with_client(ApiClient::with_transport("http://api.test", transport));

        let (user, token) = block_on(vm.login(" ana@example.com ", "pw")).unwrap();
        assert_eq!(token, "jwt");
        assert_eq!(user, User::from_email("ana@example.com"));
        assert_eq!(user.id, 0);
        assert!(user.is_active);
    }

    #[test]
    fn weak_password_never_reaches_the_network() {
        let transport = FakeTransport::new();
        let vm = AuthViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()));

        let result = block_on(vm.register("a@b.c", "short", "short"));
        assert!(matches!(result, Err(RegisterError::Password(PasswordError::Weak))));
        assert!(transport.requests().is_empty());
    }
}
