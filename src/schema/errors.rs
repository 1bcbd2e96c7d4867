//! Validation error taxonomy for student records
//!
//! Rule kinds:
//! - MissingField: required value absent or empty after trimming
//! - TooLong: trimmed length exceeds the field bound
//! - InvalidFormat: value fails a format rule (alphabetic, phone, email, ...)
//! - InvalidEnum: value is not one of the declared literals
//! - DuplicateKey: another stored record already holds the key

use std::fmt;

/// The category of rule a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Required value absent, null, or empty after trimming
    MissingField,
    /// Trimmed length exceeds the declared bound
    TooLong,
    /// Value fails a format rule
    InvalidFormat,
    /// Value is not one of the declared enum literals
    InvalidEnum,
    /// Another stored record already holds this key
    DuplicateKey,
}

impl RuleKind {
    /// Returns the stable string name used in diagnostics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::MissingField => "MISSING_FIELD",
            RuleKind::TooLong => "TOO_LONG",
            RuleKind::InvalidFormat => "INVALID_FORMAT",
            RuleKind::InvalidEnum => "INVALID_ENUM",
            RuleKind::DuplicateKey => "DUPLICATE_KEY",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field-level rule failure.
///
/// `field` is the dotted path into the record (e.g. "guardian.fatherContactNo").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted field path
    pub field: String,
    /// Which rule category failed
    pub kind: RuleKind,
    /// The offending value ("" for absent values)
    pub value: String,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        kind: RuleKind,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            value: value.into(),
            message: message.into(),
        }
    }

    /// A required field was absent or empty after trimming.
    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, RuleKind::MissingField, "", message)
    }

    /// A unique key collided with an already-stored record.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let message = format!("'{}' is already registered", value);
        Self::new(field, RuleKind::DuplicateKey, value, message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.field, self.message)
    }
}

/// The complete, ordered set of violations from one validation pass.
///
/// Never empty: a pass with no violations produces a record, not an error.
/// Violations appear in rule-table order, sub-records before top-level
/// scalars, uniqueness last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// All violations, in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if any violation targets the given field path.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Returns true if any violation is of the given kind.
    pub fn has_kind(&self, kind: RuleKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record rejected with {} violation(s):", self.violations.len())?;
        for v in &self.violations {
            write!(f, " {};", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, ValidationErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_names() {
        assert_eq!(RuleKind::MissingField.as_str(), "MISSING_FIELD");
        assert_eq!(RuleKind::TooLong.as_str(), "TOO_LONG");
        assert_eq!(RuleKind::InvalidFormat.as_str(), "INVALID_FORMAT");
        assert_eq!(RuleKind::InvalidEnum.as_str(), "INVALID_ENUM");
        assert_eq!(RuleKind::DuplicateKey.as_str(), "DUPLICATE_KEY");
    }

    #[test]
    fn test_violation_display_includes_path_and_kind() {
        let v = Violation::new(
            "name.firstName",
            RuleKind::InvalidFormat,
            "Ann3",
            "Ann3 is not a valid format. Only letters are allowed.",
        );
        let display = format!("{}", v);
        assert!(display.contains("name.firstName"));
        assert!(display.contains("INVALID_FORMAT"));
    }

    #[test]
    fn test_missing_violation_has_empty_value() {
        let v = Violation::missing("email", "Email address is required");
        assert_eq!(v.kind, RuleKind::MissingField);
        assert_eq!(v.value, "");
    }

    #[test]
    fn test_duplicate_violation_message() {
        let v = Violation::duplicate("id", "S123");
        assert_eq!(v.kind, RuleKind::DuplicateKey);
        assert!(v.message.contains("S123"));
    }

    #[test]
    fn test_errors_lookup_helpers() {
        let errs = ValidationErrors::new(vec![
            Violation::missing("email", "Email address is required"),
            Violation::duplicate("id", "S123"),
        ]);
        assert_eq!(errs.len(), 2);
        assert!(errs.has_field("email"));
        assert!(!errs.has_field("contactNo"));
        assert!(errs.has_kind(RuleKind::DuplicateKey));
        assert!(!errs.has_kind(RuleKind::TooLong));
    }
}
