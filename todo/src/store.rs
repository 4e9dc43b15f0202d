//! The todo store: sole owner of the live collection.
//!
//! Every mutation is applied in memory first and then written through to the
//! backend. A failed write keeps the in-memory change and is returned to the
//! caller as an error so the front end can warn that disk and memory have
//! diverged until the next successful save.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::io::storage::StorageBackend;
use crate::item::TodoItem;

#[derive(Debug)]
pub struct TodoStore<B> {
    items: Vec<TodoItem>,
    backend: B,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Hydrate from `backend`. If the stored collection cannot be loaded the
    /// store starts empty; the backend has already recorded why.
    pub fn open(backend: B) -> Self {
        let items = match backend.load() {
            Ok(items) => items,
            Err(err) => {
                warn!(
                    error = %format!("{err:#}"),
                    "could not load todos; starting with an empty list"
                );
                Vec::new()
            }
        };
        debug!(count = items.len(), "todo store opened");
        Self { items, backend }
    }

    /// Hydrate from `backend`, failing if the stored collection cannot be
    /// loaded.
    pub fn open_strict(backend: B) -> Result<Self> {
        let items = backend.load().context("load todos")?;
        debug!(count = items.len(), "todo store opened (strict)");
        Ok(Self { items, backend })
    }

    /// Current items in insertion order.
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append a new open item titled `title`.
    pub fn add(&mut self, title: impl Into<String>) -> Result<()> {
        let item = TodoItem::new(title);
        info!(id = %item.id, title = %item.title, "adding todo");
        self.items.push(item);
        self.persist()
    }

    /// Flip completion of the item at `index`. Returns `Ok(false)` without
    /// touching anything when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let Some(item) = self.items.get_mut(index) else {
            debug!(index, count = self.items.len(), "toggle ignored: index out of range");
            return Ok(false);
        };
        item.toggle();
        info!(id = %item.id, completed = item.is_completed, "toggled todo");
        self.persist()?;
        Ok(true)
    }

    /// Remove the item at `index`; later items shift down by one. Returns
    /// `Ok(false)` without touching anything when `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Result<bool> {
        if index >= self.items.len() {
            debug!(index, count = self.items.len(), "delete ignored: index out of range");
            return Ok(false);
        }
        let removed = self.items.remove(index);
        info!(id = %removed.id, title = %removed.title, "deleted todo");
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<()> {
        self.backend
            .save(&self.items)
            .inspect_err(|err| {
                warn!(
                    error = %format!("{err:#}"),
                    count = self.items.len(),
                    "write-through failed"
                );
            })
            .context("save todos")
    }
}
