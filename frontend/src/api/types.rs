use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credentials captured by the login form, serialized as the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body returned by the login endpoint. Anything but `result == "success"`
/// counts as a rejected login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginOutcome {
    #[serde(default)]
    pub result: Option<String>,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some("success")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
    #[error("Login rejected")]
    Rejected,
}
