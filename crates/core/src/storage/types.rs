use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partition every item row lives in.
///
/// The service keeps a single collection, so the partition is a structural
/// requirement of the table rather than a sharding key.
pub const PARTITION_KEY: &str = "Todo";

/// Default name of the table holding item rows.
pub const TABLE_NAME_DEFAULT: &str = "todoitems";

/// Opaque version marker issued by the store on every write.
///
/// The value doubles as the HTTP `ETag` header value. The wildcard `*`
/// matches any stored version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcurrencyToken(String);

impl ConcurrencyToken {
    pub const WILDCARD: &'static str = "*";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wildcard token: write regardless of the stored version.
    pub fn any() -> Self {
        Self(Self::WILDCARD.to_string())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::WILDCARD
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if a write expecting `self` may overwrite a row at `current`.
    pub fn matches(&self, current: &ConcurrencyToken) -> bool {
        self.is_wildcard() || self == current
    }
}

impl fmt::Display for ConcurrencyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A row of the partitioned table, addressed by (partition key, row key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRow {
    pub partition_key: String,
    pub row_key: String,
    pub text: String,
    pub completed: bool,
    /// Set by the store on read and write. `None` on rows built from a
    /// domain item that has not been persisted yet.
    pub etag: Option<ConcurrencyToken>,
    /// Last-modified time, set by the store.
    pub timestamp: Option<DateTime<Utc>>,
}

impl StorageRow {
    pub fn with_etag(mut self, etag: ConcurrencyToken) -> Self {
        self.etag = Some(etag);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Token to send with a conditional write: the row's own, or the wildcard.
    pub fn etag_or_any(&self) -> ConcurrencyToken {
        self.etag.clone().unwrap_or_else(ConcurrencyToken::any)
    }
}
