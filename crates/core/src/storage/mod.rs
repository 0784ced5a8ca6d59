mod error;
mod http_mapping;
mod mapping;
mod traits;
mod types;

pub use error::{StoreError, StoreResult};
pub use http_mapping::store_error_to_status_code;
pub use mapping::{to_item, to_row};
pub use traits::{RowStream, TableStore};
pub use types::{ConcurrencyToken, StorageRow, PARTITION_KEY, TABLE_NAME_DEFAULT};
