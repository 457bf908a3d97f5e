//! File-backed student roster.
//!
//! The whole roster is one JSON array on disk; every mutation is a full
//! read-modify-write of that file, serialized through a single writer lock.

pub mod store;
pub mod student;

pub use store::{RosterError, RosterStore};
pub use student::{Student, StudentPatch};
