//! Output formatting functions.

pub mod json;
pub mod pretty;

use todo_core::item::Item;

use crate::cli::OutputFormat;

/// Format one item for output.
pub fn format_item(item: &Item, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(item),
        OutputFormat::Pretty => pretty::format_item(item),
    }
}

/// Format a list of items for output.
pub fn format_items(items: &[Item], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&items),
        OutputFormat::Pretty => pretty::format_items(items),
    }
}
