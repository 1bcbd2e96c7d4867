//! Student record schema
//!
//! The canonical shape and validation contract for a student record:
//! typed model, declarative field rule tables, and the engine that
//! executes them.
//!
//! # Design Principles
//!
//! - Rules are data: one generic engine, no per-field conditionals
//! - Trim first, defaults before enum membership
//! - Sub-records before top-level scalars, every violation collected
//! - All-or-nothing admission; no partially valid record exists
//! - Deterministic: same payload, same diagnostics, every pass

mod errors;
mod rules;
mod types;
mod validator;

pub use errors::{RuleKind, SchemaResult, ValidationErrors, Violation};
pub use rules::{FieldRule, FieldSpec, SubrecordSpec};
pub use rules::{GUARDIAN_FIELDS, LOCAL_GUARDIAN_FIELDS, NAME_FIELDS, STUDENT_FIELDS, STUDENT_SUBRECORDS};
pub use types::{ActiveStatus, BloodGroup, Gender, Guardian, LocalGuardian, PersonName, Student};
pub use validator::StudentValidator;
