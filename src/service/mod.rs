//! Admission service
//!
//! Wires the validator to the storage collaborator. Control flow for an
//! admission: full validation, advisory uniqueness pre-check, then the
//! authoritative insert. Uniqueness is always evaluated last, only after
//! every shape and format rule has passed.

mod admission;

pub use admission::{ServiceError, StudentService};
