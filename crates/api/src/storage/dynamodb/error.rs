//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `todo_core::storage`.
//!
//! Conditional writes ask DynamoDB to return the old item when the check
//! fails. A failed check with no old item means the row does not exist; a
//! failed check with an old item means the stored token did not match.

use std::collections::HashMap;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::types::AttributeValue;
use todo_core::storage::{StorageRow, StoreError};

/// Which write a failed conditional check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Insert,
    Replace,
}

fn check_failed(
    old_item: Option<&HashMap<String, AttributeValue>>,
    row: &StorageRow,
) -> StoreError {
    match old_item {
        Some(_) => StoreError::conflict(&row.partition_key, &row.row_key),
        None => StoreError::not_found(&row.partition_key, &row.row_key),
    }
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            StoreError::Transient("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Transient("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StoreError::Transient("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StoreError::Transient("DynamoDB internal server error".to_string())
        }
        err => StoreError::Transient(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StoreError::Transient("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StoreError::Transient("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StoreError::Transient("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            StoreError::Transient("DynamoDB internal server error".to_string())
        }
        err => StoreError::Transient(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    row: &StorageRow,
    kind: WriteKind,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(e) => match kind {
            WriteKind::Insert => StoreError::already_exists(&row.partition_key, &row.row_key),
            WriteKind::Replace => check_failed(e.item(), row),
        },
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::Transient("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Transient("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::Transient("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::Transient("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::Transient("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::Transient("DynamoDB internal server error".to_string())
        }
        err => StoreError::Transient(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    row: &StorageRow,
) -> StoreError {
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(e) => check_failed(e.item(), row),
        DeleteItemError::ResourceNotFoundException(_) => {
            StoreError::Transient("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Transient("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StoreError::Transient("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::Transient("Item collection size limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            StoreError::Transient("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StoreError::Transient("DynamoDB internal server error".to_string())
        }
        err => StoreError::Transient(format!("DeleteItem failed: {:?}", err)),
    }
}
