//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`.
//!
//! - Validation errors always carry the name of the offending field, and
//!   the field name appears in the rendered message.
//! - Partition errors carry the rejected group size.
//! - Repository errors distinguish caller mistakes (validation, missing
//!   parent record) from backend failures.

use thiserror::Error;

/// A record failed a validation rule at the data-layer boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent.
    #[error("{field} is required")]
    Missing {
        /// Field name as it appears on the wire.
        field: &'static str,
    },

    /// A required string field was empty or whitespace.
    #[error("{field} must not be empty")]
    Empty {
        /// Field name as it appears on the wire.
        field: &'static str,
    },

    /// A field held a value outside its allowed set.
    #[error("{field} must be one of {allowed}, got {value:?}")]
    NotAllowed {
        /// Field name as it appears on the wire.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Human-readable list of accepted values.
        allowed: &'static str,
    },
}

impl ValidationError {
    /// The wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Empty { field } | Self::NotAllowed { field, .. } => {
                *field
            }
        }
    }
}

/// The group partitioner was called with an unusable group size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// Group size was zero or negative.
    #[error("invalid argument: group size must be a positive integer, got {group_size}")]
    InvalidArgument {
        /// The rejected size.
        group_size: i64,
    },
}

/// Failure reported by a [`CampusRepository`](crate::CampusRepository).
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The write payload failed validation; nothing was stored.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}
