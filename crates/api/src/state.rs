//! Application state shared by all request handlers.
//!
//! The store is held as a trait object; which backend sits behind it is
//! decided by the enabled storage feature.

use std::sync::Arc;

use todo_core::storage::TableStore;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Table store holding the item rows.
    pub store: Arc<dyn TableStore>,
}

impl AppState {
    /// Wraps an existing store.
    pub fn with_store(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryTableStore;

    impl AppState {
        /// Creates AppState backed by process memory.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(table = %config.table_name, "Using in-memory table store");
            Ok(Self::with_store(Arc::new(InMemoryTableStore::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbTableStore;

    impl AppState {
        /// Creates AppState backed by a DynamoDB table.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = DynamoDbTableStore::from_config(config).await;
            tracing::info!(
                table = %store.table_name(),
                region = %config.aws_region,
                endpoint = ?config.aws_endpoint_url,
                "Using DynamoDB table store"
            );
            Ok(Self::with_store(Arc::new(store)))
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::with_store(Arc::new(crate::storage::InMemoryTableStore::new()))
    }
}
