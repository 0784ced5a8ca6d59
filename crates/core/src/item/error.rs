use thiserror::Error;

/// Errors produced while decoding and validating request payloads.
///
/// Every variant maps to a `400 Bad Request`; none of them reach the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is empty")]
    EmptyBody,
    #[error("Request body is not valid JSON: {0}")]
    MalformedJson(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field `{field}` must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Item text cannot be empty")]
    BlankText,
    #[error("Item id cannot be empty")]
    BlankId,
    #[error("Body id `{body}` does not match path id `{path}`")]
    IdMismatch { path: String, body: String },
}
