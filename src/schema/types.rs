//! Typed student record model
//!
//! The Student aggregate owns three sub-records (PersonName, Guardian,
//! LocalGuardian). Sub-records have no identity or lifecycle of their own;
//! they are created and destroyed with their parent. Wire names are
//! camelCase to match the admission payload format.

use serde::{Deserialize, Serialize};

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Accepted wire literals, used in enum diagnostics.
    pub const LITERALS: &'static [&'static str] = &["male", "female", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// Accepted wire literals, used in enum diagnostics.
    pub const LITERALS: &'static [&'static str] =
        &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

/// Record status. Absent on admission, substituted with `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    #[default]
    Active,
    Blocked,
}

impl ActiveStatus {
    /// Accepted wire literals, used in enum diagnostics.
    pub const LITERALS: &'static [&'static str] = &["active", "blocked"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Blocked => "blocked",
        }
    }
}

/// Student name sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    /// Given name, alphabetic, at most 20 characters
    pub first_name: String,

    /// Optional middle name, alphabetic when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Family name, alphabetic, at most 20 characters
    pub last_name: String,
}

/// Parent guardian sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub father_name: String,
    pub father_occupation: String,
    pub father_contact_no: String,
    pub mother_name: String,
    pub mother_occupation: String,
    pub mother_contact_no: String,
}

/// Local guardian sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalGuardian {
    pub name: String,
    pub occupation: String,
    pub contact_no: String,
    pub address: String,
}

/// The persisted student aggregate.
///
/// Only produced by the validator; a `Student` value is by construction
/// normalized (trimmed, defaults applied) and schema-conformant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Alphanumeric student identifier, globally unique
    pub id: String,

    pub name: PersonName,

    pub gender: Gender,

    /// Canonical `YYYY-MM-DD` calendar date
    pub date_of_birth: String,

    /// Globally unique email address
    pub email: String,

    pub contact_no: String,

    pub emergency_contact_no: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,

    pub present_address: String,

    pub permanent_address: String,

    pub guardian: Guardian,

    pub local_guardian: LocalGuardian,

    /// Optional profile image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,

    #[serde(default)]
    pub is_active: ActiveStatus,
}

impl Student {
    /// Soft-deactivation: the record stays stored but is marked blocked.
    pub fn deactivate(&mut self) {
        self.is_active = ActiveStatus::Blocked;
    }

    pub fn is_blocked(&self) -> bool {
        self.is_active == ActiveStatus::Blocked
    }
}
