//! # Validation Predicates
//!
//! Pure checks applied to write payloads before anything reaches storage.
//! Both repository implementations call these, so the rules hold
//! regardless of backend, and they are testable without a database.

use crate::error::ValidationError;
use crate::model::{CampusId, NewCampus, NewStudent, Phase};

/// A campus payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusDraft {
    pub name: String,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// A student payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: Option<String>,
    pub phase: Option<Phase>,
    pub campus_id: Option<CampusId>,
}

/// A required string field must be present and not blank.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// `phase` is either absent or one of the enumerated values.
pub fn phase(value: Option<&str>) -> Result<Option<Phase>, ValidationError> {
    value.map(str::parse).transpose()
}

/// Validate a campus payload.
pub fn campus(new: NewCampus) -> Result<CampusDraft, ValidationError> {
    Ok(CampusDraft {
        name: required_text("name", new.name)?,
        image_url: new.image_url,
        address: new.address,
        description: new.description,
    })
}

/// Validate a student payload. The name is checked before the phase.
pub fn student(new: NewStudent) -> Result<StudentDraft, ValidationError> {
    let name = required_text("name", new.name)?;
    let phase = phase(new.phase.as_deref())?;
    Ok(StudentDraft {
        name,
        email: new.email,
        phase,
        campus_id: new.campus_id,
    })
}
