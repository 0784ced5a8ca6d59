use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use super::{ConcurrencyToken, StorageRow, StoreResult};

/// Lazy sequence of rows produced by a scan.
pub type RowStream<'a> = Pin<Box<dyn Stream<Item = StoreResult<StorageRow>> + Send + 'a>>;

/// A partitioned key-value table with per-row optimistic concurrency.
///
/// Rows are addressed by (partition key, row key). Every successful write
/// issues a fresh [`ConcurrencyToken`].
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Inserts a new row. Fails with `AlreadyExists` if the key is taken.
    async fn insert(&self, row: &StorageRow) -> StoreResult<ConcurrencyToken>;

    /// Overwrites an existing row if its stored token matches `expected`.
    ///
    /// The wildcard token skips the version check. Fails with `NotFound`
    /// when no row has the key and `ConcurrencyConflict` on a token mismatch.
    async fn replace(
        &self,
        row: &StorageRow,
        expected: &ConcurrencyToken,
    ) -> StoreResult<ConcurrencyToken>;

    /// Point lookup.
    async fn get_by_key(&self, partition_key: &str, row_key: &str)
        -> StoreResult<Option<StorageRow>>;

    /// Removes the row, checking its token (a row without one is deleted
    /// unconditionally). Fails with `NotFound` or `ConcurrencyConflict`.
    async fn delete(&self, row: &StorageRow) -> StoreResult<()>;

    /// Scans every row of a partition.
    ///
    /// Each call starts a new scan; order is unspecified but stable within
    /// one scan.
    fn scan_all(&self, partition_key: &str) -> RowStream<'_>;
}
