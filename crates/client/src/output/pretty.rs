//! Pretty output formatting.

use todo_core::item::Item;

/// Format an item as a single checklist line.
pub fn format_item(item: &Item) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!("[{}] {} ({})", mark, item.text, item.id)
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push('\n');
        output.push_str(&format_item(item));
    }
    output
}
