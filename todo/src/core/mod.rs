//! Deterministic, pure logic shared by the todo store and its front ends.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod command;
pub mod invariants;
pub mod position;
