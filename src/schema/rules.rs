//! Declarative field rule tables
//!
//! Every constraint on a student record is data in this module: a
//! `FieldSpec` names a field, whether it is required, its default, and the
//! ordered list of `FieldRule`s it must satisfy. The validator executes
//! these tables generically; no field has bespoke validation code.
//!
//! Tables are static slices, so diagnostics come out in declaration order
//! on every pass.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::errors::{RuleKind, Violation};
use super::types::{ActiveStatus, BloodGroup, Gender};

/// A single format or bound constraint on a trimmed string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Trimmed length must not exceed the bound
    MaxLength(usize),
    /// Every character must be a letter
    Alphabetic,
    /// Every character must be a letter or digit
    Alphanumeric,
    /// Permissive locale-agnostic phone number
    Phone,
    /// Syntactically valid email address
    Email,
    /// Calendar date in canonical `YYYY-MM-DD` form
    Date,
    /// Syntactically valid URL
    Url,
    /// Exactly one of the declared literals
    OneOf(&'static [&'static str]),
}

impl FieldRule {
    /// Checks a trimmed value against this rule.
    ///
    /// Trimming and required/default handling happen before any rule runs;
    /// by the time a rule sees a value it is non-empty and whitespace-free
    /// at the edges.
    pub fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        match self {
            FieldRule::MaxLength(bound) => {
                if value.chars().count() > *bound {
                    return Err(Violation::new(
                        field,
                        RuleKind::TooLong,
                        value,
                        format!("cannot be more than {} characters", bound),
                    ));
                }
            }
            FieldRule::Alphabetic => {
                if !value.chars().all(char::is_alphabetic) {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidFormat,
                        value,
                        format!("{} is not a valid format. Only letters are allowed.", value),
                    ));
                }
            }
            FieldRule::Alphanumeric => {
                if !value.chars().all(char::is_alphanumeric) {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidFormat,
                        value,
                        format!(
                            "{} is not valid. Only alphanumeric characters are allowed.",
                            value
                        ),
                    ));
                }
            }
            FieldRule::Phone => {
                if !is_plausible_phone(value) {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidFormat,
                        value,
                        format!("{} is not a valid phone number", value),
                    ));
                }
            }
            FieldRule::Email => {
                if !email_pattern().is_match(value) {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidFormat,
                        value,
                        format!("{} is not a valid email address", value),
                    ));
                }
            }
            FieldRule::Date => {
                if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidFormat,
                        value,
                        format!("{} is not a valid date. Please use YYYY-MM-DD format.", value),
                    ));
                }
            }
            FieldRule::Url => {
                if !url_pattern().is_match(value) {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidFormat,
                        value,
                        format!("{} is not a valid URL", value),
                    ));
                }
            }
            FieldRule::OneOf(literals) => {
                if !literals.contains(&value) {
                    return Err(Violation::new(
                        field,
                        RuleKind::InvalidEnum,
                        value,
                        format!(
                            "{} is not valid. Valid values are: {}",
                            value,
                            literals.join(", ")
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// One field of a record or sub-record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Whether absence (or emptiness after trimming) is a violation
    pub required: bool,
    /// Substituted before any rule runs when the field is absent
    pub default: Option<&'static str>,
    /// Message reported when a required field is missing
    pub required_message: &'static str,
    /// Ordered rules a present value must satisfy
    pub rules: &'static [FieldRule],
}

impl FieldSpec {
    const fn required(
        name: &'static str,
        required_message: &'static str,
        rules: &'static [FieldRule],
    ) -> Self {
        Self {
            name,
            required: true,
            default: None,
            required_message,
            rules,
        }
    }

    const fn optional(name: &'static str, rules: &'static [FieldRule]) -> Self {
        Self {
            name,
            required: false,
            default: None,
            required_message: "",
            rules,
        }
    }

    const fn defaulted(
        name: &'static str,
        default: &'static str,
        rules: &'static [FieldRule],
    ) -> Self {
        Self {
            name,
            required: false,
            default: Some(default),
            required_message: "",
            rules,
        }
    }
}

/// A nested sub-record owned by the student aggregate.
#[derive(Debug, Clone, Copy)]
pub struct SubrecordSpec {
    /// Wire name of the sub-record field
    pub name: &'static str,
    /// Message reported when the whole sub-record is missing
    pub required_message: &'static str,
    /// Field table applied inside the sub-record
    pub fields: &'static [FieldSpec],
}

/// Name sub-record rules.
pub const NAME_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "firstName",
        "First name is required and cannot be empty",
        &[FieldRule::MaxLength(20), FieldRule::Alphabetic],
    ),
    FieldSpec::optional("middleName", &[FieldRule::Alphabetic]),
    FieldSpec::required(
        "lastName",
        "Last name is required and cannot be empty",
        &[FieldRule::MaxLength(20), FieldRule::Alphabetic],
    ),
];

/// Guardian sub-record rules.
pub const GUARDIAN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "fatherName",
        "Father's name is required",
        &[FieldRule::Alphabetic],
    ),
    FieldSpec::required("fatherOccupation", "Father's occupation is required", &[]),
    FieldSpec::required(
        "fatherContactNo",
        "Father's contact number is required",
        &[FieldRule::Phone],
    ),
    FieldSpec::required(
        "motherName",
        "Mother's name is required",
        &[FieldRule::Alphabetic],
    ),
    FieldSpec::required("motherOccupation", "Mother's occupation is required", &[]),
    FieldSpec::required(
        "motherContactNo",
        "Mother's contact number is required",
        &[FieldRule::Phone],
    ),
];

/// Local guardian sub-record rules.
pub const LOCAL_GUARDIAN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "name",
        "Local guardian's name is required",
        &[FieldRule::Alphabetic],
    ),
    FieldSpec::required("occupation", "Local guardian's occupation is required", &[]),
    FieldSpec::required(
        "contactNo",
        "Local guardian's contact number is required",
        &[FieldRule::Phone],
    ),
    FieldSpec::required("address", "Local guardian's address is required", &[]),
];

/// The three sub-records, evaluated before any top-level scalar.
pub const STUDENT_SUBRECORDS: &[SubrecordSpec] = &[
    SubrecordSpec {
        name: "name",
        required_message: "Student name is required",
        fields: NAME_FIELDS,
    },
    SubrecordSpec {
        name: "guardian",
        required_message: "Guardian details are required",
        fields: GUARDIAN_FIELDS,
    },
    SubrecordSpec {
        name: "localGuardian",
        required_message: "Local guardian details are required",
        fields: LOCAL_GUARDIAN_FIELDS,
    },
];

/// Top-level scalar rules.
pub const STUDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("id", "Student ID is required", &[FieldRule::Alphanumeric]),
    FieldSpec::required(
        "gender",
        "Gender is required",
        &[FieldRule::OneOf(Gender::LITERALS)],
    ),
    FieldSpec::required(
        "dateOfBirth",
        "Date of birth is required",
        &[FieldRule::Date],
    ),
    FieldSpec::required("email", "Email address is required", &[FieldRule::Email]),
    FieldSpec::required(
        "contactNo",
        "Contact number is required",
        &[FieldRule::Phone],
    ),
    FieldSpec::required(
        "emergencyContactNo",
        "Emergency contact number is required",
        &[FieldRule::Phone],
    ),
    FieldSpec::optional("bloodGroup", &[FieldRule::OneOf(BloodGroup::LITERALS)]),
    FieldSpec::required("presentAddress", "Present address is required", &[]),
    FieldSpec::required("permanentAddress", "Permanent address is required", &[]),
    FieldSpec::optional("profileImg", &[FieldRule::Url]),
    FieldSpec::defaulted("isActive", "active", &[FieldRule::OneOf(ActiveStatus::LITERALS)]),
];

/// Looks up a top-level scalar spec by wire name.
pub fn student_field(name: &str) -> Option<&'static FieldSpec> {
    STUDENT_FIELDS.iter().find(|spec| spec.name == name)
}

/// Looks up a sub-record spec by wire name.
pub fn student_subrecord(name: &str) -> Option<&'static SubrecordSpec> {
    STUDENT_SUBRECORDS.iter().find(|spec| spec.name == name)
}

/// Permissive phone plausibility: optional leading `+`, common separators
/// allowed, 7 to 15 digits total. Locale-agnostic and non-strict.
fn is_plausible_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0usize;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if !matches!(c, ' ' | '-' | '.' | '(' | ')') {
            return false;
        }
    }
    (7..=15).contains(&digits)
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern")
    })
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(https?|ftp)://[^\s/?#]+\.[^\s]+$").expect("url pattern")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: FieldRule, value: &str) -> Result<(), Violation> {
        rule.check("field", value)
    }

    #[test]
    fn test_max_length_bound_is_inclusive() {
        assert!(check(FieldRule::MaxLength(20), &"a".repeat(20)).is_ok());
        let err = check(FieldRule::MaxLength(20), &"a".repeat(21)).unwrap_err();
        assert_eq!(err.kind, RuleKind::TooLong);
    }

    #[test]
    fn test_max_length_counts_characters_not_bytes() {
        // 20 two-byte characters must still pass
        assert!(check(FieldRule::MaxLength(20), &"é".repeat(20)).is_ok());
    }

    #[test]
    fn test_alphabetic_rejects_digits_spaces_punctuation() {
        assert!(check(FieldRule::Alphabetic, "Ann").is_ok());
        assert!(check(FieldRule::Alphabetic, "Renée").is_ok());
        for bad in ["Ann3", "Ann Lee", "Ann-Lee", "O'Brien"] {
            let err = check(FieldRule::Alphabetic, bad).unwrap_err();
            assert_eq!(err.kind, RuleKind::InvalidFormat);
        }
    }

    #[test]
    fn test_alphanumeric_allows_letters_and_digits_only() {
        assert!(check(FieldRule::Alphanumeric, "S123").is_ok());
        assert!(check(FieldRule::Alphanumeric, "2024A01").is_ok());
        assert!(check(FieldRule::Alphanumeric, "S-123").is_err());
        assert!(check(FieldRule::Alphanumeric, "S 123").is_err());
    }

    #[test]
    fn test_phone_accepts_permissive_forms() {
        for good in [
            "+11234567890",
            "01712345678",
            "(555) 123-4567",
            "555.123.4567",
        ] {
            assert!(check(FieldRule::Phone, good).is_ok(), "{}", good);
        }
    }

    #[test]
    fn test_phone_rejects_letters_and_bad_lengths() {
        for bad in ["12345", "not-a-phone", "+1 (555) CALL-NOW", "1234567890123456"] {
            assert!(check(FieldRule::Phone, bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_email_syntax() {
        assert!(check(FieldRule::Email, "ann@x.com").is_ok());
        assert!(check(FieldRule::Email, "ann.lee+roster@mail.example.org").is_ok());
        for bad in ["not-an-email", "ann@", "@x.com", "ann@x", "ann lee@x.com"] {
            assert!(check(FieldRule::Email, bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_date_canonical_form_only() {
        assert!(check(FieldRule::Date, "2005-04-01").is_ok());
        for bad in ["2005-13-01", "2005-02-30", "01-04-2005", "2005/04/01", "yesterday"] {
            assert!(check(FieldRule::Date, bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_url_syntax() {
        assert!(check(FieldRule::Url, "https://cdn.example.com/img/ann.png").is_ok());
        assert!(check(FieldRule::Url, "http://example.com/p").is_ok());
        for bad in ["not a url", "example.com/img.png", "https://", "ftp://nohost"] {
            assert!(check(FieldRule::Url, bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_one_of_is_exact_match() {
        let rule = FieldRule::OneOf(Gender::LITERALS);
        assert!(check(rule, "female").is_ok());
        let err = check(rule, "Female").unwrap_err();
        assert_eq!(err.kind, RuleKind::InvalidEnum);
        assert!(err.message.contains("male, female, other"));
    }

    #[test]
    fn test_tables_expose_every_student_field() {
        for name in [
            "id",
            "gender",
            "dateOfBirth",
            "email",
            "contactNo",
            "emergencyContactNo",
            "bloodGroup",
            "presentAddress",
            "permanentAddress",
            "profileImg",
            "isActive",
        ] {
            assert!(student_field(name).is_some(), "{}", name);
        }
        for name in ["name", "guardian", "localGuardian"] {
            assert!(student_subrecord(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_is_active_carries_default() {
        let spec = student_field("isActive").unwrap();
        assert_eq!(spec.default, Some("active"));
        assert!(!spec.required);
    }

    #[test]
    fn test_blood_group_is_optional() {
        let spec = student_field("bloodGroup").unwrap();
        assert!(!spec.required);
        assert_eq!(spec.default, None);
    }
}
