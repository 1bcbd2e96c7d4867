//! Storage collaborator for student records
//!
//! The validator never persists; it hands normalized records to a
//! `StudentRepository`. The repository owns the authoritative id/email
//! uniqueness constraints and must enforce them atomically on insert.

mod errors;
mod repository;

pub use errors::{StorageError, StorageResult};
pub use repository::{InMemoryStudentRepository, StudentRepository};
