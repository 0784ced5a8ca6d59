//! Functional core for the todo service.
//!
//! Pure data types and pure functions: the domain [`item::Item`], request
//! schemas and their validation, the mapping between items and partitioned
//! storage rows, and the [`storage::TableStore`] contract the backends implement.

pub mod item;
pub mod storage;
