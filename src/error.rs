use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // Configuration errors
    #[error("Invalid client configuration: {message}")]
    Config { message: String },

    // Lookup failures (service responded 404 for a singular lookup)
    #[error("User not found: {discord_id}")]
    UserNotFound { discord_id: String },

    #[error("Team not found: {auth_id}")]
    TeamNotFound { auth_id: String },

    #[error("Discord resource not found: {name}")]
    ResourceNotFound { name: String },

    // Request failures
    #[error("API request failed with status {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Failed to decode API response: {message}")]
    Decode { message: String },

    // Verification token errors
    #[error("HMAC key must not be empty")]
    EmptyHmacKey,
}

impl ApiError {
    /// True for the not-found variants, so callers can branch on
    /// "does not exist" without matching every lookup type.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::UserNotFound { .. }
                | ApiError::TeamNotFound { .. }
                | ApiError::ResourceNotFound { .. }
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = ApiError::UserNotFound {
            discord_id: "123".to_string(),
        };
        assert!(err.is_not_found());

        let err = ApiError::TeamNotFound {
            auth_id: "abc".to_string(),
        };
        assert!(err.is_not_found());

        let err = ApiError::Service {
            status: 500,
            body: "oops".to_string(),
        };
        assert!(!err.is_not_found());
    }
}
