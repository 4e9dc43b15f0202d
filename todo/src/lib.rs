//! Command-line todo list manager.
//!
//! An ordered list of todo items that survives across runs. The crate is
//! split the same way throughout:
//!
//! - **[`core`]**: Pure parsing and validation (commands, positions,
//!   collection invariants). No I/O.
//! - **[`io`]**: Storage backends behind the [`io::storage::StorageBackend`]
//!   trait, plus configuration and `.todo/` scaffolding.
//! - **[`store`]**: [`store::TodoStore`], the single owner of the live
//!   collection, which writes through to its backend after every mutation.
//!
//! [`shell`] and [`cli`] are the front ends that call into the store.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod item;
pub mod logging;
pub mod shell;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
