use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identifier, 32 lowercase hex characters. Never reassigned.
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Creates a new, not yet completed item with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_item_id(),
            text: text.into(),
            completed: false,
        }
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Generates a fresh item id: a random 128-bit value as lowercase hex, no hyphens.
pub fn new_item_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Response payload for listing items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}
