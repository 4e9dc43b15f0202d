//! Test-only helpers for building todo fixtures and faulty backends.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::io::storage::StorageBackend;
use crate::item::TodoItem;

/// Create an item with a fresh id and explicit completion.
pub fn item(title: &str, is_completed: bool) -> TodoItem {
    TodoItem {
        is_completed,
        ..TodoItem::new(title)
    }
}

/// Titles of `items` in order.
pub fn titles(items: &[TodoItem]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

/// Backend whose save and/or load always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage {
    fail_save: bool,
    fail_load: bool,
}

impl FailingStorage {
    /// Loads empty, every save fails.
    pub fn unwritable() -> Self {
        Self {
            fail_save: true,
            fail_load: false,
        }
    }

    /// Every load fails, saves succeed.
    pub fn unreadable() -> Self {
        Self {
            fail_save: false,
            fail_load: true,
        }
    }
}

impl StorageBackend for FailingStorage {
    fn save(&mut self, _items: &[TodoItem]) -> Result<()> {
        if self.fail_save {
            return Err(anyhow!("disk full"));
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<TodoItem>> {
        if self.fail_load {
            return Err(anyhow!("corrupt todo file"));
        }
        Ok(Vec::new())
    }
}

/// Temporary project root for filesystem-backed tests.
pub struct TestDir {
    temp: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Default collection file location under `.todo/`.
    pub fn data_path(&self) -> PathBuf {
        self.path().join(".todo").join("todos.json")
    }
}
