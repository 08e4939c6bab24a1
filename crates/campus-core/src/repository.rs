//! # Repository Interface
//!
//! [`CampusRepository`] is the data-access seam of the directory. Handlers
//! and action creators depend on the trait, never on a concrete backend.
//!
//! [`MemoryRepository`] keeps both tables in ordered maps behind one
//! `parking_lot::RwLock`. The lock is never held across an `.await`, so
//! the synchronous lock is safe inside async methods.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::error::RepositoryError;
use crate::model::{Campus, CampusId, NewCampus, NewStudent, Student, StudentId};
use crate::validate;

/// Data access for campuses and their students.
///
/// Write methods validate their payload first and return
/// [`RepositoryError::Validation`] without touching storage on failure.
#[async_trait]
pub trait CampusRepository: Send + Sync {
    /// All campuses, ordered by id.
    async fn list_campuses(&self) -> Result<Vec<Campus>, RepositoryError>;

    /// A single campus, or `None` if absent.
    async fn get_campus(&self, id: CampusId) -> Result<Option<Campus>, RepositoryError>;

    /// Students belonging to a campus, ordered by id. An unknown campus
    /// has no students.
    async fn list_students_by_campus(&self, id: CampusId) -> Result<Vec<Student>, RepositoryError>;

    /// Validate and store a campus.
    async fn create_campus(&self, new: NewCampus) -> Result<Campus, RepositoryError>;

    /// Validate and store a student. A `campusId` that names no campus is
    /// [`RepositoryError::NotFound`].
    async fn create_student(&self, new: NewStudent) -> Result<Student, RepositoryError>;
}

#[derive(Debug, Default)]
struct Tables {
    campuses: BTreeMap<CampusId, Campus>,
    students: BTreeMap<StudentId, Student>,
    last_campus_id: i64,
    last_student_id: i64,
}

/// In-process repository. Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campuses.
    pub fn campus_count(&self) -> usize {
        self.tables.read().campuses.len()
    }

    /// Number of stored students.
    pub fn student_count(&self) -> usize {
        self.tables.read().students.len()
    }
}

#[async_trait]
impl CampusRepository for MemoryRepository {
    async fn list_campuses(&self) -> Result<Vec<Campus>, RepositoryError> {
        Ok(self.tables.read().campuses.values().cloned().collect())
    }

    async fn get_campus(&self, id: CampusId) -> Result<Option<Campus>, RepositoryError> {
        Ok(self.tables.read().campuses.get(&id).cloned())
    }

    async fn list_students_by_campus(&self, id: CampusId) -> Result<Vec<Student>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .students
            .values()
            .filter(|s| s.campus_id == Some(id))
            .cloned()
            .collect())
    }

    async fn create_campus(&self, new: NewCampus) -> Result<Campus, RepositoryError> {
        let draft = validate::campus(new)?;
        let now = Utc::now();

        let mut tables = self.tables.write();
        tables.last_campus_id += 1;
        let campus = Campus {
            id: CampusId(tables.last_campus_id),
            name: draft.name,
            image_url: draft.image_url,
            address: draft.address,
            description: draft.description,
            created_at: now,
            updated_at: now,
        };
        tables.campuses.insert(campus.id, campus.clone());
        tracing::debug!(campus_id = %campus.id, "campus stored");
        Ok(campus)
    }

    async fn create_student(&self, new: NewStudent) -> Result<Student, RepositoryError> {
        let draft = validate::student(new)?;
        let now = Utc::now();

        let mut tables = self.tables.write();
        if let Some(campus_id) = draft.campus_id {
            if !tables.campuses.contains_key(&campus_id) {
                return Err(RepositoryError::NotFound(campus_id.to_string()));
            }
        }
        tables.last_student_id += 1;
        let student = Student {
            id: StudentId(tables.last_student_id),
            name: draft.name,
            email: draft.email,
            phase: draft.phase,
            campus_id: draft.campus_id,
            created_at: now,
            updated_at: now,
        };
        tables.students.insert(student.id, student.clone());
        tracing::debug!(student_id = %student.id, "student stored");
        Ok(student)
    }
}

/// Insert a small sample directory: two campuses and three students.
///
/// Returns the created campuses in insertion order.
pub async fn seed_sample(repo: &dyn CampusRepository) -> Result<Vec<Campus>, RepositoryError> {
    let hopper = repo.create_campus(NewCampus::named("Grace Hopper")).await?;
    let flex = repo.create_campus(NewCampus::named("Flex")).await?;

    repo.create_student(NewStudent::named("Terry Witz", hopper.id).with_phase("junior"))
        .await?;
    repo.create_student(NewStudent::named("Gaby Medina", flex.id).with_phase("senior"))
        .await?;
    repo.create_student(NewStudent::named("Yuval Ivana", hopper.id).with_phase("senior"))
        .await?;

    tracing::info!(campuses = 2, students = 3, "sample directory seeded");
    Ok(vec![hopper, flex])
}
