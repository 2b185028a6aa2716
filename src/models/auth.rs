use serde::{Deserialize, Serialize};
use super::serde_ext::default_true;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    /// User record for logins that only yield a token (and for demo mode)
    pub fn from_email(email: &str) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            is_active: true,
        }
    }
}

/// Body of both `/auth/login` and `/auth/register`
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default = "TokenResponse::bearer")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl TokenResponse {
    fn bearer() -> String {
        "bearer".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_accepts_both_token_field_names() {
        let plain: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(plain.access_token, "abc");
        assert!(plain.user.is_none());

        let legacy: TokenResponse = serde_json::from_str(
            r#"{"token":"xyz","user":{"id":7,"email":"a@b.c","is_active":true}}"#,
        )
        .unwrap();
        assert_eq!(legacy.access_token, "xyz");
        assert_eq!(legacy.token_type, "bearer");
        assert_eq!(legacy.user.unwrap().id, 7);
    }

    #[test]
    fn user_defaults_to_active() {
        let user: User = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert!(user.is_active);
        assert_eq!(user, User::from_email("x@y.z"));
    }
}
