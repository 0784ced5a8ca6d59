//! In-memory storage backend.
//!
//! Rows live in a `BTreeMap` keyed by (partition key, row key) behind an
//! `Arc<RwLock<_>>`. Concurrency tokens come from a per-store counter.
//!
//! # Example
//!
//! ```rust,ignore
//! use todo_api::storage::inmemory::InMemoryTableStore;
//!
//! let store = InMemoryTableStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryTableStore;
