//! Stable exit codes for todo CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, configuration, or a strict load that could not read the collection.
pub const INVALID: i32 = 1;
/// The change was applied but could not be written to storage.
pub const STORAGE: i32 = 2;
