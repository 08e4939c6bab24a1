//! # Directory Records
//!
//! Plain data records for campuses and students. A campus does not embed
//! its students; rosters are loaded on demand through the repository.
//!
//! Wire names are camelCase (`campusId`, `createdAt`) to match the JSON
//! contract of the HTTP surface.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Store-assigned identifier of a campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct CampusId(pub i64);

/// Store-assigned identifier of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl CampusId {
    /// Access the raw integer key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl StudentId {
    /// Access the raw integer key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CampusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "campus:{}", self.0)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "student:{}", self.0)
    }
}

/// Enrollment phase of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Junior,
    Senior,
}

impl Phase {
    /// Accepted values, for error messages.
    pub const ALLOWED: &'static str = "junior, senior or null";

    /// The wire / column representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(Self::Junior),
            "senior" => Ok(Self::Senior),
            other => Err(ValidationError::NotAllowed {
                field: "phase",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// A persisted campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    pub id: CampusId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `None` until the student is placed in a phase.
    pub phase: Option<Phase>,
    /// `None` for a student not yet assigned to a campus.
    pub campus_id: Option<CampusId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a campus. Unchecked until passed through
/// [`validate::campus`](crate::validate::campus).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewCampus {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl NewCampus {
    /// A payload carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Payload for creating a student.
///
/// `phase` is kept as a raw string so that an out-of-range value reaches
/// validation and is reported against the `phase` field, rather than
/// failing opaquely inside the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phase: Option<String>,
    pub campus_id: Option<CampusId>,
}

impl NewStudent {
    /// A payload with a name and campus, no phase.
    pub fn named(name: impl Into<String>, campus_id: CampusId) -> Self {
        Self {
            name: Some(name.into()),
            campus_id: Some(campus_id),
            ..Self::default()
        }
    }

    /// Set the phase.
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }
}
