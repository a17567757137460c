//! Error Types

use thiserror::Error;

/// Shown when the collaborator gives us nothing better to say
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed. Please try again.";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// The collaborator rejected the call; carries its message (may be empty)
    #[error("{0}")]
    Rejected(String),
    #[error("authentication service is not available")]
    Unavailable,
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Text for the login banner
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => GENERIC_LOGIN_FAILURE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_fallback() {
        assert_eq!(AuthError::Rejected("Wrong password".into()).user_message(), "Wrong password");
        assert_eq!(AuthError::Rejected("  ".into()).user_message(), GENERIC_LOGIN_FAILURE);
        assert_eq!(AuthError::Unavailable.user_message(), GENERIC_LOGIN_FAILURE);
    }
}
