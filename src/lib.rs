//! rostercore - validation core for student records
//!
//! Defines the canonical shape of a Student record, the declarative rule
//! tables that decide whether an incoming record may be persisted, and the
//! storage seam behind which uniqueness is enforced.

pub mod observability;
pub mod schema;
pub mod service;
pub mod storage;
