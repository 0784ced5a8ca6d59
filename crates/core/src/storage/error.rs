use thiserror::Error;

/// Errors that can occur during table store operations.
///
/// These are store-level kinds; callers decide what each one means for them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Row not found: {partition_key}/{row_key}")]
    NotFound {
        partition_key: String,
        row_key: String,
    },
    #[error("Row already exists: {partition_key}/{row_key}")]
    AlreadyExists {
        partition_key: String,
        row_key: String,
    },
    #[error("Concurrency token mismatch: {partition_key}/{row_key}")]
    ConcurrencyConflict {
        partition_key: String,
        row_key: String,
    },
    #[error("Store unavailable: {0}")]
    Transient(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    pub fn not_found(partition_key: &str, row_key: &str) -> Self {
        Self::NotFound {
            partition_key: partition_key.to_string(),
            row_key: row_key.to_string(),
        }
    }

    pub fn already_exists(partition_key: &str, row_key: &str) -> Self {
        Self::AlreadyExists {
            partition_key: partition_key.to_string(),
            row_key: row_key.to_string(),
        }
    }

    pub fn conflict(partition_key: &str, row_key: &str) -> Self {
        Self::ConcurrencyConflict {
            partition_key: partition_key.to_string(),
            row_key: row_key.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
