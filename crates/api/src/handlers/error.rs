use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use todo_core::item::ValidationError;
use todo_core::storage::{store_error_to_status_code, StoreError};

/// Errors returned by the item handlers.
///
/// Store errors pass through with their default status code; handlers
/// translate the kinds that mean something specific for their operation
/// before they get here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid If-Match header")]
    InvalidPrecondition,
    #[error("Item {0} not found")]
    NotFound(String),
    #[error("Item {0} was modified by another request")]
    PreconditionFailed(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidPrecondition => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,
            ApiError::Store(e) => StatusCode::from_u16(store_error_to_status_code(e))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "API error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::from(ValidationError::BlankText);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Item text cannot be empty");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::NotFound("abc".to_string());
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_precondition_failed_maps_to_412() {
        let error = ApiError::PreconditionFailed("abc".to_string());
        assert_eq!(error.status_code(), StatusCode::PRECONDITION_FAILED);
    }

    #[test]
    fn test_transient_store_error_maps_to_503() {
        let error = ApiError::from(StoreError::Transient("down".to_string()));
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = ApiError::from(StoreError::InvalidData("bad row".to_string()));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
