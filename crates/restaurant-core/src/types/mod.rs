//! Core type definitions used across the workspace.

pub mod document;
pub mod pagination;
pub mod patch;

pub use document::{Document, Filter, InsertOutcome, UpdateOutcome};
pub use pagination::{PageRequest, Slice};
pub use patch::DocumentPatch;
