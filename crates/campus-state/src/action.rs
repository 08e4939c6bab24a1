//! # Action Descriptors
//!
//! ```json
//! {"type": "SELECT_CAMPUS", "campus": {"id": 1, "name": "Mars", ...}}
//! ```
//!
//! Every campus payload is held behind `Arc`. The reducer stores them
//! as-is, so the snapshot ends up pointing at the very value that was
//! dispatched.

use std::sync::Arc;

use campus_core::Campus;
use serde::{Deserialize, Serialize};

/// A requested state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the campus list.
    SetCampuses { campuses: Arc<Vec<Arc<Campus>>> },
    /// Replace the selected campus.
    SelectCampus { campus: Arc<Campus> },
    /// Append one campus to the end of the list.
    AddCampus { campus: Arc<Campus> },
    /// Any kind this client does not know. Reduces to a no-op.
    #[serde(other)]
    Unrecognized,
}

impl Action {
    pub fn set_campuses(campuses: impl Into<Arc<Vec<Arc<Campus>>>>) -> Self {
        Self::SetCampuses {
            campuses: campuses.into(),
        }
    }

    /// `SET_CAMPUSES` from freshly loaded records.
    pub fn load_campuses(campuses: impl IntoIterator<Item = Campus>) -> Self {
        Self::set_campuses(campuses.into_iter().map(Arc::new).collect::<Vec<_>>())
    }

    pub fn select_campus(campus: impl Into<Arc<Campus>>) -> Self {
        Self::SelectCampus {
            campus: campus.into(),
        }
    }

    pub fn add_campus(campus: impl Into<Arc<Campus>>) -> Self {
        Self::AddCampus {
            campus: campus.into(),
        }
    }

    /// The wire tag, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetCampuses { .. } => "SET_CAMPUSES",
            Self::SelectCampus { .. } => "SELECT_CAMPUS",
            Self::AddCampus { .. } => "ADD_CAMPUS",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::CampusId;
    use chrono::Utc;

    fn campus(id: i64, name: &str) -> Campus {
        let now = Utc::now();
        Campus {
            id: CampusId(id),
            name: name.into(),
            image_url: None,
            address: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn select_campus_carries_the_given_arc() {
        let mars = Arc::new(campus(1, "Mars"));
        let action = Action::select_campus(Arc::clone(&mars));
        match &action {
            Action::SelectCampus { campus } => assert!(Arc::ptr_eq(campus, &mars)),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(action.kind(), "SELECT_CAMPUS");
    }

    #[test]
    fn tagged_on_type_field() {
        let json = serde_json::to_value(Action::load_campuses(vec![campus(1, "Chicago")])).unwrap();
        assert_eq!(json["type"], "SET_CAMPUSES");
        assert_eq!(json["campuses"][0]["name"], "Chicago");

        let parsed: Action = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.kind(), "SET_CAMPUSES");
    }

    #[test]
    fn unknown_kind_parses_as_unrecognized() {
        let parsed: Action = serde_json::from_str(r#"{"type":"UNKNOWN"}"#).unwrap();
        assert_eq!(parsed, Action::Unrecognized);

        let parsed: Action =
            serde_json::from_str(r#"{"type":"SET_STUDENTS","students":[]}"#).unwrap();
        assert_eq!(parsed, Action::Unrecognized);
    }
}
