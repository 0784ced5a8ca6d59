//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to its default HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConcurrencyConflict` -> 412 (Precondition Failed)
/// - `Transient` -> 503 (Service Unavailable)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// Handlers override this where an operation gives a kind a different
/// meaning (a conflicting delete is reported as already gone, for instance).
///
/// # Examples
///
/// ```
/// use todo_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::not_found("Todo", "abc");
/// assert_eq!(store_error_to_status_code(&error), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::NotFound { .. } => 404,
        StoreError::AlreadyExists { .. } => 409,
        StoreError::ConcurrencyConflict { .. } => 412,
        StoreError::Transient(_) => 503,
        StoreError::InvalidData(_) => 500,
    }
}
