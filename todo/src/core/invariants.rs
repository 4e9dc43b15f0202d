//! Collection invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::item::TodoItem;

/// Check invariants of a loaded collection:
/// - No duplicate ids
pub fn validate_invariants(items: &[TodoItem]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if !seen.insert(item.id) {
            errors.push(format!("duplicate id '{}' at position {}", item.id, index + 1));
        }
    }
    errors
}
