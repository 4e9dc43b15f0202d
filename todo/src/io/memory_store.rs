//! Volatile backend holding the collection for the life of the process.

use anyhow::Result;

use crate::io::storage::StorageBackend;
use crate::item::TodoItem;

/// In-memory slot. Used by tests and by `--memory` sessions; never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slot: Vec<TodoItem>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` already in the slot, as if saved earlier.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            slot: items,
            saves: 0,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.slot
    }

    /// Number of `save` calls received so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StorageBackend for MemoryStorage {
    fn save(&mut self, items: &[TodoItem]) -> Result<()> {
        self.slot = items.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Vec<TodoItem>> {
        Ok(self.slot.clone())
    }
}
