//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`TableStore`]
//! using `aws-sdk-dynamodb`. Rows use `PK`/`SK` as the table's partition
//! and sort keys; concurrency tokens are stored in an `etag` attribute and
//! checked with condition expressions.
//!
//! [`TableStore`]: todo_core::storage::TableStore

mod conversions;
mod error;
mod store;

pub use store::DynamoDbTableStore;
