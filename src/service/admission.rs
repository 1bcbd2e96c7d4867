//! Student admission, amendment, and removal
//!
//! The service never persists a record with outstanding violations. The
//! repository's uniqueness constraint stays authoritative: a concurrent
//! insert that wins the race surfaces here as the same `DuplicateKey`
//! diagnostic the advisory pre-check would have produced.

use serde_json::Value;
use thiserror::Error;

use crate::observability::Logger;
use crate::schema::{Student, StudentValidator, ValidationErrors, Violation};
use crate::storage::{StorageError, StudentRepository};

/// Errors surfaced by the admission service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The record was rejected; the caller can correct the input and retry.
    #[error(transparent)]
    Rejected(#[from] ValidationErrors),

    /// The storage collaborator failed for a non-validation reason.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// A storage duplicate is a validation outcome, not a fault.
    fn from_storage(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateKey { key, value } => {
                ServiceError::Rejected(ValidationErrors::new(vec![Violation::duplicate(
                    key, value,
                )]))
            }
            other => ServiceError::Storage(other),
        }
    }
}

/// Admission service over a storage collaborator.
pub struct StudentService<R: StudentRepository> {
    validator: StudentValidator,
    repository: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            validator: StudentValidator::new(),
            repository,
        }
    }

    /// Access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates and persists a new student record.
    ///
    /// All shape/format violations are collected first; uniqueness runs
    /// last, against persisted state. On success the normalized record is
    /// returned as stored.
    pub fn admit(&self, payload: &Value) -> Result<Student, ServiceError> {
        let student = self.validator.validate(payload).map_err(|errs| {
            log_rejection("none", &errs);
            errs
        })?;

        // Advisory pre-check for a complete diagnostic; id before email.
        let mut duplicates = Vec::new();
        if self.repository.exists_by_id(&student.id)? {
            duplicates.push(Violation::duplicate("id", &student.id));
        }
        if self.repository.exists_by_email(&student.email)? {
            duplicates.push(Violation::duplicate("email", &student.email));
        }
        if !duplicates.is_empty() {
            let errs = ValidationErrors::new(duplicates);
            log_rejection(&student.id, &errs);
            return Err(errs.into());
        }

        match self.repository.insert(&student) {
            Ok(()) => {
                Logger::info("STUDENT_ADMITTED", &[("id", student.id.as_str())]);
                Ok(student)
            }
            Err(err) => {
                let reason = err.to_string();
                Logger::warn(
                    "STUDENT_INSERT_FAILED",
                    &[("id", student.id.as_str()), ("reason", reason.as_str())],
                );
                Err(ServiceError::from_storage(err))
            }
        }
    }

    /// Applies a partial amendment to a stored record.
    ///
    /// The changed fields re-run their own rules first; the merged record
    /// then re-validates in full before being persisted. A changed email
    /// re-checks uniqueness.
    pub fn amend(&self, id: &str, patch: &Value) -> Result<Student, ServiceError> {
        self.validator.validate_patch(patch)?;

        let existing = self
            .repository
            .find_by_id(id)?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        let mut merged_payload = serde_json::to_value(&existing)
            .map_err(|err| StorageError::Internal(err.to_string()))?;
        if let (Some(base), Some(changes)) = (merged_payload.as_object_mut(), patch.as_object()) {
            for (key, value) in changes {
                base.insert(key.clone(), value.clone());
            }
        }

        let merged = self.validator.validate(&merged_payload)?;

        if merged.email != existing.email && self.repository.exists_by_email(&merged.email)? {
            let errs = ValidationErrors::new(vec![Violation::duplicate("email", &merged.email)]);
            log_rejection(id, &errs);
            return Err(errs.into());
        }

        self.repository
            .update(&merged)
            .map_err(ServiceError::from_storage)?;
        Logger::info("STUDENT_AMENDED", &[("id", id)]);
        Ok(merged)
    }

    /// Soft-deactivation: marks the record blocked but keeps it stored.
    pub fn deactivate(&self, id: &str) -> Result<Student, ServiceError> {
        let mut student = self
            .repository
            .find_by_id(id)?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        student.deactivate();
        self.repository
            .update(&student)
            .map_err(ServiceError::from_storage)?;
        Logger::info("STUDENT_DEACTIVATED", &[("id", id)]);
        Ok(student)
    }

    /// Hard delete. Sibling records are unaffected.
    pub fn remove(&self, id: &str) -> Result<(), ServiceError> {
        self.repository.delete(id)?;
        Logger::info("STUDENT_REMOVED", &[("id", id)]);
        Ok(())
    }
}

fn log_rejection(id: &str, errs: &ValidationErrors) {
    let count = errs.len().to_string();
    Logger::warn("STUDENT_REJECTED", &[("id", id), ("violations", count.as_str())]);
}
