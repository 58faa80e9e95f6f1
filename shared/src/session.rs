use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::Notice;

/// The auth service has handed out both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: UserId,
    #[serde(default, alias = "username")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl SessionIdentity {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.email } else { &self.name }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<SessionIdentity>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Login rejected: {0}")]
    Rejected(String),
    #[error("Auth server unreachable: {0}")]
    Unreachable(String),
    #[error("Failed to parse auth response: {0}")]
    Decode(String),
}

impl AuthError {
    pub fn notice(&self) -> Notice {
        match self {
            AuthError::Rejected(message) => Notice::destructive("Error", message.clone()),
            AuthError::Unreachable(_) | AuthError::Decode(_) => {
                Notice::destructive("Error", "Something went wrong")
            }
        }
    }
}

impl LoginResponse {
    /// Interprets the body of a `POST /auth/login` given the HTTP outcome.
    pub fn into_identity(self, ok: bool) -> Result<SessionIdentity, AuthError> {
        match (ok, self.user) {
            (true, Some(user)) => Ok(user),
            (true, None) => Err(AuthError::Decode("missing `user` object".into())),
            (false, _) => Err(AuthError::Rejected(
                self.error.unwrap_or_else(|| "Login failed".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let numeric: SessionIdentity =
            serde_json::from_str(r#"{ "id": 7, "name": "Asha", "email": "asha@farm.io" }"#).unwrap();
        assert_eq!(numeric.id, UserId::Number(7));
        assert_eq!(numeric.id.to_string(), "7");

        let text: SessionIdentity =
            serde_json::from_str(r#"{ "id": "65f1c0", "username": "Bo", "email": "bo@farm.io" }"#).unwrap();
        assert_eq!(text.id, UserId::Text("65f1c0".into()));
        assert_eq!(text.name, "Bo");
    }

    #[test]
    fn id_round_trips_in_its_original_shape() {
        let identity = SessionIdentity {
            id: UserId::Number(42),
            name: "Asha".into(),
            email: "asha@farm.io".into(),
        };
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["id"], serde_json::json!(42));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let identity: SessionIdentity = serde_json::from_str(r#"{ "id": 1, "email": "x@y.z" }"#).unwrap();
        assert_eq!(identity.display_name(), "x@y.z");
    }

    #[test]
    fn login_error_body() {
        let response: LoginResponse = serde_json::from_str(r#"{ "error": "Invalid credentials" }"#).unwrap();
        let err = response.into_identity(false).unwrap_err();
        assert_eq!(err, AuthError::Rejected("Invalid credentials".into()));
        assert_eq!(err.notice().description, "Invalid credentials");
    }

    #[test]
    fn rejected_login_without_message() {
        let err = LoginResponse::default().into_identity(false).unwrap_err();
        assert_eq!(err.notice().description, "Login failed");
    }

    #[test]
    fn successful_login_yields_identity() {
        let response: LoginResponse =
            serde_json::from_str(r#"{ "user": { "id": 5, "name": "Asha", "email": "asha@farm.io" } }"#).unwrap();
        let identity = response.into_identity(true).unwrap();
        assert_eq!(identity.id, UserId::Number(5));
    }
}
