//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! storage rows. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use todo_core::storage::{ConcurrencyToken, StorageRow, StoreError, StoreResult};

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_PK: &str = "PK";
pub const ATTR_SK: &str = "SK";
pub const ATTR_TEXT: &str = "text";
pub const ATTR_COMPLETED: &str = "completed";
pub const ATTR_ETAG: &str = "etag";
pub const ATTR_TIMESTAMP: &str = "timestamp";

// ============================================================================
// Row conversions
// ============================================================================

/// Key attributes addressing a single row.
pub fn row_key(partition_key: &str, row_key: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ATTR_PK.to_string(),
            AttributeValue::S(partition_key.to_string()),
        ),
        (ATTR_SK.to_string(), AttributeValue::S(row_key.to_string())),
    ])
}

/// Convert a StorageRow to a DynamoDB item carrying the given token and time.
///
/// The row's own `etag` and `timestamp` are ignored; the store issues new ones.
pub fn row_to_item(
    row: &StorageRow,
    etag: &ConcurrencyToken,
    timestamp: DateTime<Utc>,
) -> HashMap<String, AttributeValue> {
    let mut item = row_key(&row.partition_key, &row.row_key);

    item.insert(ATTR_TEXT.to_string(), AttributeValue::S(row.text.clone()));
    item.insert(
        ATTR_COMPLETED.to_string(),
        AttributeValue::Bool(row.completed),
    );
    item.insert(
        ATTR_ETAG.to_string(),
        AttributeValue::S(etag.as_str().to_string()),
    );
    item.insert(
        ATTR_TIMESTAMP.to_string(),
        AttributeValue::S(timestamp.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a StorageRow.
pub fn item_to_row(item: &HashMap<String, AttributeValue>) -> StoreResult<StorageRow> {
    Ok(StorageRow {
        partition_key: get_string(item, ATTR_PK)?,
        row_key: get_string(item, ATTR_SK)?,
        text: get_string(item, ATTR_TEXT)?,
        completed: get_bool(item, ATTR_COMPLETED)?,
        etag: get_optional_string(item, ATTR_ETAG).map(ConcurrencyToken::new),
        timestamp: get_optional_datetime(item, ATTR_TIMESTAMP)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> StoreResult<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a boolean attribute. Absent means `false`.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> StoreResult<bool> {
    match item.get(key) {
        None => Ok(false),
        Some(value) => value
            .as_bool()
            .copied()
            .map_err(|_| StoreError::InvalidData(format!("Invalid boolean field: {}", key))),
    }
}

/// Get an optional datetime attribute (RFC 3339 format).
fn get_optional_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> StoreResult<Option<DateTime<Utc>>> {
    get_optional_string(item, key)
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| StoreError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::item::Item;
    use todo_core::storage::{to_item, to_row};

    fn sample_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_row_to_item_attributes() {
        let row = to_row(&Item::new("buy milk").with_id("abc").with_completed(true));
        let item = row_to_item(&row, &ConcurrencyToken::new("\"t1\""), sample_time());

        assert_eq!(item.get("PK").unwrap().as_s().unwrap(), "Todo");
        assert_eq!(item.get("SK").unwrap().as_s().unwrap(), "abc");
        assert_eq!(item.get("text").unwrap().as_s().unwrap(), "buy milk");
        assert!(*item.get("completed").unwrap().as_bool().unwrap());
        assert_eq!(item.get("etag").unwrap().as_s().unwrap(), "\"t1\"");
        assert_eq!(
            item.get("timestamp").unwrap().as_s().unwrap(),
            "2024-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn test_round_trip() {
        let original = Item::new("read").with_id("xyz");
        let token = ConcurrencyToken::new("\"t2\"");
        let item = row_to_item(&to_row(&original), &token, sample_time());

        let row = item_to_row(&item).unwrap();
        assert_eq!(row.etag, Some(token));
        assert_eq!(row.timestamp, Some(sample_time()));
        assert_eq!(to_item(row), original);
    }

    #[test]
    fn test_missing_text_is_invalid() {
        let mut item = row_key("Todo", "abc");
        item.insert("completed".to_string(), AttributeValue::Bool(false));

        let result = item_to_row(&item);
        assert!(matches!(result, Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let mut item = row_key("Todo", "abc");
        item.insert("text".to_string(), AttributeValue::S("x".to_string()));

        let row = item_to_row(&item).unwrap();
        assert!(!row.completed);
        assert!(row.etag.is_none());
        assert!(row.timestamp.is_none());
    }

    #[test]
    fn test_wrong_completed_type_is_invalid() {
        let mut item = row_key("Todo", "abc");
        item.insert("text".to_string(), AttributeValue::S("x".to_string()));
        item.insert("completed".to_string(), AttributeValue::S("yes".to_string()));

        assert!(matches!(
            item_to_row(&item),
            Err(StoreError::InvalidData(_))
        ));
    }
}
