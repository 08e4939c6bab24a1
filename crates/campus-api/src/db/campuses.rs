//! Campus and student persistence.
//!
//! [`PgRepository`] implements [`CampusRepository`] over the `campuses`
//! and `students` tables. Payloads are validated in Rust before any SQL
//! runs; the table CHECK constraints only back that up.

use async_trait::async_trait;
use campus_core::validate;
use campus_core::{
    Campus, CampusId, CampusRepository, NewCampus, NewStudent, Phase, RepositoryError, Student,
    StudentId,
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Postgres-backed repository. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "database operation failed");
    RepositoryError::Backend(err.to_string())
}

#[async_trait]
impl CampusRepository for PgRepository {
    async fn list_campuses(&self) -> Result<Vec<Campus>, RepositoryError> {
        let rows = sqlx::query_as::<_, CampusRow>(
            "SELECT id, name, image_url, address, description, created_at, updated_at
             FROM campuses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(CampusRow::into_record).collect())
    }

    async fn get_campus(&self, id: CampusId) -> Result<Option<Campus>, RepositoryError> {
        let row = sqlx::query_as::<_, CampusRow>(
            "SELECT id, name, image_url, address, description, created_at, updated_at
             FROM campuses WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        Ok(row.map(CampusRow::into_record))
    }

    async fn list_students_by_campus(&self, id: CampusId) -> Result<Vec<Student>, RepositoryError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, email, phase, campus_id, created_at, updated_at
             FROM students WHERE campus_id = $1 ORDER BY id",
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(StudentRow::into_record).collect())
    }

    async fn create_campus(&self, new: NewCampus) -> Result<Campus, RepositoryError> {
        let draft = validate::campus(new)?;

        let row = sqlx::query_as::<_, CampusRow>(
            "INSERT INTO campuses (name, image_url, address, description)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, image_url, address, description, created_at, updated_at",
        )
        .bind(&draft.name)
        .bind(&draft.image_url)
        .bind(&draft.address)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        Ok(row.into_record())
    }

    async fn create_student(&self, new: NewStudent) -> Result<Student, RepositoryError> {
        let draft = validate::student(new)?;

        let result = sqlx::query_as::<_, StudentRow>(
            "INSERT INTO students (name, email, phase, campus_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, phase, campus_id, created_at, updated_at",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(draft.phase.as_ref().map(Phase::as_str))
        .bind(draft.campus_id.map(CampusId::get))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into_record()),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => {
                let missing = draft
                    .campus_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "campus".to_string());
                Err(RepositoryError::NotFound(missing))
            }
            Err(err) => Err(backend(err)),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CampusRow {
    id: i64,
    name: String,
    image_url: Option<String>,
    address: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CampusRow {
    fn into_record(self) -> Campus {
        Campus {
            id: CampusId(self.id),
            name: self.name,
            image_url: self.image_url,
            address: self.address,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: Option<String>,
    phase: Option<String>,
    campus_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StudentRow {
    fn into_record(self) -> Student {
        let phase = self.phase.as_deref().and_then(|raw| match raw.parse::<Phase>() {
            Ok(phase) => Some(phase),
            Err(e) => {
                tracing::error!(student_id = self.id, error = %e, "unknown phase in database; reading as null");
                None
            }
        });
        Student {
            id: StudentId(self.id),
            name: self.name,
            email: self.email,
            phase,
            campus_id: self.campus_id.map(CampusId),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
