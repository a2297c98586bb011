use serde::{Deserialize, Serialize};

use crate::db::models::User;

/// Body of the `authentication` writes and of `POST /cred`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthenticationPayload {
    #[serde(default, alias = "userID")]
    pub(crate) userid: Option<i64>,
    #[serde(default)]
    pub(crate) password: Option<String>,
}

/// Result of a credential check. `result` holds the matching user rows.
#[derive(Debug, Serialize)]
pub(crate) struct CredentialResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
    pub(crate) result: Vec<User>,
}

impl CredentialResponse {
    pub(crate) fn from_matches(result: Vec<User>) -> Self {
        if result.is_empty() {
            Self { success: false, message: "Invalid credential".to_string(), result }
        } else {
            Self { success: true, message: "Valid credential".to_string(), result }
        }
    }
}
