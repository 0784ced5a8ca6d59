//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Item not found: {message}")]
    NotFound { message: String },

    #[error("Item changed on the server: {message}")]
    Conflict { message: String },

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ClientError::BadRequest { message },
            404 => ClientError::NotFound { message },
            412 => ClientError::Conflict { message },
            _ => ClientError::ServerError { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ClientError::from_status(400, "bad".into()),
            ClientError::BadRequest { .. }
        ));
        assert!(matches!(
            ClientError::from_status(404, "gone".into()),
            ClientError::NotFound { .. }
        ));
        assert!(matches!(
            ClientError::from_status(412, "stale".into()),
            ClientError::Conflict { .. }
        ));
        assert!(matches!(
            ClientError::from_status(503, "down".into()),
            ClientError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_display_includes_message() {
        let error = ClientError::from_status(500, "boom".into());
        assert_eq!(error.to_string(), "Server returned 500: boom");
    }
}
