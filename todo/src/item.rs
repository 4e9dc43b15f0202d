//! The todo item record.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task. `id` is assigned once at creation and never changes;
/// `title` is fixed for the item's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl TodoItem {
    /// Create an open item with a fresh id. Title validation happens at the
    /// command boundary, not here.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_completed { "[x]" } else { "[ ]" }
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.title)
    }
}
