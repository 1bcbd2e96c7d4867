//! Student record validation engine
//!
//! Executes the declarative rule tables against a candidate payload.
//!
//! # Semantics
//!
//! - Trimming precedes every other rule
//! - Defaults are substituted before enum membership runs
//! - Sub-records (name, guardian, localGuardian) are evaluated before
//!   top-level scalars
//! - Every violation is collected; no short-circuit on first failure
//! - All-or-nothing: a record with any outstanding violation is never
//!   produced
//! - Unknown payload fields are ignored
//!
//! Uniqueness is not checked here; it needs a view of persisted state and
//! belongs to the admission service and, authoritatively, to storage.

use serde_json::{Map, Value};

use super::errors::{RuleKind, SchemaResult, ValidationErrors, Violation};
use super::rules::{
    student_field, student_subrecord, FieldSpec, STUDENT_FIELDS, STUDENT_SUBRECORDS,
};
use super::types::Student;

/// Validates candidate student payloads against the rule tables.
///
/// Pure and stateless: the same payload always yields the same outcome.
#[derive(Debug, Default)]
pub struct StudentValidator;

impl StudentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a full admission payload.
    ///
    /// On success returns the normalized record: strings trimmed, defaults
    /// applied, unknown fields dropped. On failure returns every violation
    /// found, in rule-table order with sub-record violations first.
    pub fn validate(&self, payload: &Value) -> SchemaResult<Student> {
        let obj = match payload.as_object() {
            Some(obj) => obj,
            None => return Err(non_object_payload(payload)),
        };

        let mut violations = Vec::new();
        let mut normalized = Map::new();

        for sub in STUDENT_SUBRECORDS {
            match obj.get(sub.name) {
                None | Some(Value::Null) => {
                    violations.push(Violation::missing(sub.name, sub.required_message));
                }
                Some(Value::Object(nested)) => {
                    let mut nested_out = Map::new();
                    for spec in sub.fields {
                        let path = format!("{}.{}", sub.name, spec.name);
                        apply_field(spec, nested.get(spec.name), &path, &mut violations, &mut nested_out);
                    }
                    normalized.insert(sub.name.to_string(), Value::Object(nested_out));
                }
                Some(other) => {
                    violations.push(Violation::new(
                        sub.name,
                        RuleKind::InvalidFormat,
                        other.to_string(),
                        "expected a nested object",
                    ));
                }
            }
        }

        for spec in STUDENT_FIELDS {
            apply_field(spec, obj.get(spec.name), spec.name, &mut violations, &mut normalized);
        }

        if !violations.is_empty() {
            return Err(ValidationErrors::new(violations));
        }

        // Every rule passed, so the normalized map matches the typed model.
        serde_json::from_value(Value::Object(normalized)).map_err(|err| {
            ValidationErrors::new(vec![Violation::new(
                "$root",
                RuleKind::InvalidFormat,
                "",
                format!("normalized record does not conform to the student shape: {}", err),
            )])
        })
    }

    /// Validates a partial amendment payload.
    ///
    /// Re-runs the field rules on exactly the fields present; absence is
    /// never a violation here. A present sub-record replaces the stored one
    /// wholesale and is validated in full. The student ID is immutable.
    pub fn validate_patch(&self, patch: &Value) -> SchemaResult<()> {
        let obj = match patch.as_object() {
            Some(obj) => obj,
            None => return Err(non_object_payload(patch)),
        };

        let mut violations = Vec::new();
        let mut scratch = Map::new();

        for (key, value) in obj {
            if key == "id" {
                violations.push(Violation::new(
                    "id",
                    RuleKind::InvalidFormat,
                    value.as_str().unwrap_or_default(),
                    "student ID is immutable and cannot be amended",
                ));
            } else if let Some(sub) = student_subrecord(key) {
                match value {
                    Value::Object(nested) => {
                        for spec in sub.fields {
                            let path = format!("{}.{}", sub.name, spec.name);
                            apply_field(spec, nested.get(spec.name), &path, &mut violations, &mut scratch);
                        }
                    }
                    _ => violations.push(Violation::new(
                        sub.name,
                        RuleKind::InvalidFormat,
                        value.to_string(),
                        "expected a nested object",
                    )),
                }
            } else if let Some(spec) = student_field(key) {
                apply_field(spec, Some(value), spec.name, &mut violations, &mut scratch);
            }
            // Unknown fields are dropped on the floor, same as in validate.
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(violations))
        }
    }
}

/// Runs one field through trim, required/default handling, and its rules,
/// writing the normalized value into `out` when every rule passes.
fn apply_field(
    spec: &FieldSpec,
    raw: Option<&Value>,
    path: &str,
    violations: &mut Vec<Violation>,
    out: &mut Map<String, Value>,
) {
    let trimmed = match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim()),
        Some(other) => {
            violations.push(Violation::new(
                path,
                RuleKind::InvalidFormat,
                other.to_string(),
                "expected a string value",
            ));
            return;
        }
    };

    let value = match trimmed {
        Some(v) if !v.is_empty() => v,
        // Absent, or nothing left after trimming
        _ => {
            if let Some(default) = spec.default {
                out.insert(spec.name.to_string(), Value::String(default.to_string()));
            } else if spec.required {
                violations.push(Violation::missing(path, spec.required_message));
            }
            return;
        }
    };

    let mut passed = true;
    for rule in spec.rules {
        if let Err(violation) = rule.check(path, value) {
            violations.push(violation);
            passed = false;
        }
    }

    if passed {
        out.insert(spec.name.to_string(), Value::String(value.to_string()));
    }
}

fn non_object_payload(payload: &Value) -> ValidationErrors {
    ValidationErrors::new(vec![Violation::new(
        "$root",
        RuleKind::InvalidFormat,
        payload.to_string(),
        "payload must be a JSON object",
    )])
}
