//! Request schemas for the item API.
//!
//! Bodies are decoded in two steps: raw bytes into a JSON object, then each
//! field is checked against the schema. This keeps "missing field" and
//! "wrong type" distinguishable, which a plain derived `Deserialize` does not.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ValidationError;
use super::types::Item;

/// Request payload for creating a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub text: String,
}

impl CreateItemRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Convert into a fresh, not yet completed Item.
    pub fn into_item(self) -> Item {
        Item::new(self.text)
    }
}

/// Request payload for replacing an item. Carries the full item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl UpdateItemRequest {
    pub fn into_item(self) -> Item {
        Item {
            id: self.id,
            text: self.text,
            completed: self.completed,
        }
    }
}

impl From<Item> for UpdateItemRequest {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            text: item.text,
            completed: item.completed,
        }
    }
}

/// Decode and validate a create request body.
///
/// `text` is required and must contain something other than whitespace.
pub fn decode_create(body: &[u8]) -> Result<CreateItemRequest, ValidationError> {
    let object = parse_object(body)?;
    let text = required_string(&object, "text")?;

    if text.trim().is_empty() {
        return Err(ValidationError::BlankText);
    }

    Ok(CreateItemRequest { text })
}

/// Decode and validate an update request body against the path identifier.
///
/// `id` and `text` are required strings, `completed` is an optional boolean
/// defaulting to `false`. The body id must equal the path id.
pub fn decode_update(path_id: &str, body: &[u8]) -> Result<UpdateItemRequest, ValidationError> {
    let path_id = validate_id(path_id)?;
    let object = parse_object(body)?;

    let id = required_string(&object, "id")?;
    let text = required_string(&object, "text")?;
    let completed = optional_bool(&object, "completed")?.unwrap_or(false);

    if id != path_id {
        return Err(ValidationError::IdMismatch {
            path: path_id.to_string(),
            body: id,
        });
    }

    Ok(UpdateItemRequest {
        id,
        text,
        completed,
    })
}

/// Reject blank path identifiers.
pub fn validate_id(raw: &str) -> Result<&str, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::BlankId);
    }
    Ok(raw)
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(ValidationError::NotAnObject),
    }
}

/// `null` counts as missing.
fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "string",
        }),
    }
}

fn optional_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "boolean",
        }),
    }
}
