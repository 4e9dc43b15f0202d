//! Storage backend abstraction.
//!
//! The [`StorageBackend`] trait decouples the todo store from where the
//! collection lives. `Ok`/`Err` replace the success flag of `save` and the
//! collection-or-absent result of `load`: a backend never panics or aborts
//! the caller on a storage problem, it returns an error describing it.

use anyhow::Result;

use crate::item::TodoItem;

pub trait StorageBackend {
    /// Persist the full collection, replacing whatever was stored before.
    /// Saving the same collection twice must leave the same stored state.
    fn save(&mut self, items: &[TodoItem]) -> Result<()>;

    /// Return the last saved collection. A backend that has never been
    /// saved to returns an empty collection; `Err` is reserved for stored
    /// state that exists but cannot be read or decoded.
    fn load(&self) -> Result<Vec<TodoItem>>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn save(&mut self, items: &[TodoItem]) -> Result<()> {
        (**self).save(items)
    }

    fn load(&self) -> Result<Vec<TodoItem>> {
        (**self).load()
    }
}
