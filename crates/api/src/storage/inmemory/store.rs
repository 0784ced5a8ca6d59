//! In-memory table store implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use todo_core::storage::{
    ConcurrencyToken, RowStream, StorageRow, StoreError, StoreResult, TableStore,
};

type TableKey = (String, String);

/// In-memory partitioned table.
///
/// Data is not persisted and will be lost when the store is dropped.
/// Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    rows: Arc<RwLock<BTreeMap<TableKey, StorageRow>>>,
    version: Arc<AtomicU64>,
}

impl InMemoryTableStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next concurrency token, e.g. `W/"3"`.
    fn next_token(&self) -> ConcurrencyToken {
        let version = self.version.fetch_add(1, Ordering::Relaxed) + 1;
        ConcurrencyToken::new(format!("W/\"{version}\""))
    }

    /// Copy of `row` as stored: fresh token and timestamp.
    fn stamp(&self, row: &StorageRow) -> StorageRow {
        row.clone()
            .with_etag(self.next_token())
            .with_timestamp(Utc::now())
    }
}

fn key_of(row: &StorageRow) -> TableKey {
    (row.partition_key.clone(), row.row_key.clone())
}

fn token_matches(expected: &ConcurrencyToken, stored: &StorageRow) -> bool {
    stored
        .etag
        .as_ref()
        .map_or(true, |current| expected.matches(current))
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn insert(&self, row: &StorageRow) -> StoreResult<ConcurrencyToken> {
        let mut rows = self.rows.write().await;
        let key = key_of(row);
        if rows.contains_key(&key) {
            return Err(StoreError::already_exists(&row.partition_key, &row.row_key));
        }

        let stored = self.stamp(row);
        let token = stored.etag_or_any();
        rows.insert(key, stored);
        Ok(token)
    }

    async fn replace(
        &self,
        row: &StorageRow,
        expected: &ConcurrencyToken,
    ) -> StoreResult<ConcurrencyToken> {
        let mut rows = self.rows.write().await;
        let Some(current) = rows.get_mut(&key_of(row)) else {
            return Err(StoreError::not_found(&row.partition_key, &row.row_key));
        };

        if !token_matches(expected, current) {
            return Err(StoreError::conflict(&row.partition_key, &row.row_key));
        }

        let stored = self.stamp(row);
        let token = stored.etag_or_any();
        *current = stored;
        Ok(token)
    }

    async fn get_by_key(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> StoreResult<Option<StorageRow>> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&(partition_key.to_string(), row_key.to_string()))
            .cloned())
    }

    async fn delete(&self, row: &StorageRow) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let key = key_of(row);
        let Some(current) = rows.get(&key) else {
            return Err(StoreError::not_found(&row.partition_key, &row.row_key));
        };

        if !token_matches(&row.etag_or_any(), current) {
            return Err(StoreError::conflict(&row.partition_key, &row.row_key));
        }

        rows.remove(&key);
        Ok(())
    }

    fn scan_all(&self, partition_key: &str) -> RowStream<'_> {
        let partition_key = partition_key.to_string();

        Box::pin(async_stream::stream! {
            // Snapshot the partition so one scan is stable under concurrent writes.
            let snapshot: Vec<StorageRow> = {
                let rows = self.rows.read().await;
                rows.iter()
                    .filter(|((pk, _), _)| *pk == partition_key)
                    .map(|(_, row)| row.clone())
                    .collect()
            };

            for row in snapshot {
                yield Ok(row);
            }
        })
    }
}
