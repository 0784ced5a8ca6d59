mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::{decode_create, decode_update, validate_id, CreateItemRequest, UpdateItemRequest};
pub use types::{new_item_id, Item, ItemList};
