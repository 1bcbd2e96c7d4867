//! Student repository contract and in-memory implementation
//!
//! The repository is the authoritative holder of the id/email uniqueness
//! constraints: `insert` must reject a colliding record atomically, so two
//! concurrent admissions with the same key can never both succeed. The
//! `exists_by_*` lookups exist so the validator can run an advisory
//! pre-check for a better diagnostic.

use std::sync::RwLock;

use crate::schema::Student;

use super::errors::{StorageError, StorageResult};

/// Storage collaborator for student records.
pub trait StudentRepository: Send + Sync {
    /// Inserts a validated record, enforcing id/email uniqueness atomically.
    fn insert(&self, student: &Student) -> StorageResult<()>;

    /// Replaces the stored record with the same id.
    fn update(&self, student: &Student) -> StorageResult<()>;

    /// Removes the record with the given id. Sibling records are unaffected.
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// Looks up a record by student id.
    fn find_by_id(&self, id: &str) -> StorageResult<Option<Student>>;

    /// Returns true if a stored record holds this student id.
    fn exists_by_id(&self, id: &str) -> StorageResult<bool>;

    /// Returns true if a stored record holds this email.
    fn exists_by_email(&self, email: &str) -> StorageResult<bool>;
}

/// In-memory repository for embedding and tests.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.students.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StorageError {
    StorageError::Internal("lock poisoned".to_string())
}

impl StudentRepository for InMemoryStudentRepository {
    fn insert(&self, student: &Student) -> StorageResult<()> {
        // Single write lock covers the check and the push, so the
        // uniqueness constraint holds under concurrent inserts.
        let mut students = self.students.write().map_err(|_| poisoned())?;

        if students.iter().any(|s| s.id == student.id) {
            return Err(StorageError::duplicate_key("id", &student.id));
        }
        if students.iter().any(|s| s.email == student.email) {
            return Err(StorageError::duplicate_key("email", &student.email));
        }

        students.push(student.clone());
        Ok(())
    }

    fn update(&self, student: &Student) -> StorageResult<()> {
        let mut students = self.students.write().map_err(|_| poisoned())?;

        if students
            .iter()
            .any(|s| s.id != student.id && s.email == student.email)
        {
            return Err(StorageError::duplicate_key("email", &student.email));
        }

        match students.iter_mut().find(|s| s.id == student.id) {
            Some(existing) => {
                *existing = student.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound(student.id.clone())),
        }
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut students = self.students.write().map_err(|_| poisoned())?;
        let before = students.len();
        students.retain(|s| s.id != id);
        if students.len() == before {
            Err(StorageError::NotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    fn find_by_id(&self, id: &str) -> StorageResult<Option<Student>> {
        let students = self.students.read().map_err(|_| poisoned())?;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    fn exists_by_id(&self, id: &str) -> StorageResult<bool> {
        let students = self.students.read().map_err(|_| poisoned())?;
        Ok(students.iter().any(|s| s.id == id))
    }

    fn exists_by_email(&self, email: &str) -> StorageResult<bool> {
        let students = self.students.read().map_err(|_| poisoned())?;
        Ok(students.iter().any(|s| s.email == email))
    }
}
