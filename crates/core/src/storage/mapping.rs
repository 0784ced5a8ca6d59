//! Conversion between domain items and storage rows.
//!
//! Pure and total in both directions. The row key is the item id and every
//! row lands in [`PARTITION_KEY`].

use crate::item::Item;

use super::types::{StorageRow, PARTITION_KEY};

/// Convert an Item to a storage row in the fixed partition.
///
/// The row carries no concurrency token or timestamp; those are assigned
/// by the store.
pub fn to_row(item: &Item) -> StorageRow {
    StorageRow {
        partition_key: PARTITION_KEY.to_string(),
        row_key: item.id.clone(),
        text: item.text.clone(),
        completed: item.completed,
        etag: None,
        timestamp: None,
    }
}

/// Convert a storage row to an Item.
pub fn to_item(row: StorageRow) -> Item {
    Item {
        id: row.row_key,
        text: row.text,
        completed: row.completed,
    }
}

impl From<&Item> for StorageRow {
    fn from(item: &Item) -> Self {
        to_row(item)
    }
}

impl From<StorageRow> for Item {
    fn from(row: StorageRow) -> Self {
        to_item(row)
    }
}
