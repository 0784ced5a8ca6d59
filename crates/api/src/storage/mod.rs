//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`TableStore`]
//! trait defined in `todo_core::storage`. The backend the server runs with
//! is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): rows kept in process memory, lost on restart
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one backend can be
//! enabled at a time. The in-memory store is always compiled so the router
//! tests can run against it.
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p todo_api --no-default-features --features dynamodb
//! ```
//!
//! [`TableStore`]: todo_core::storage::TableStore

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p todo_api --no-default-features --features dynamodb"
);

#[cfg_attr(feature = "dynamodb", allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[allow(unused_imports)]
pub use inmemory::InMemoryTableStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTableStore;
