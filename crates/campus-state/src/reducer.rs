//! # Campus State Reducer
//!
//! ```text
//! SET_CAMPUSES   campuses        <- payload
//! SELECT_CAMPUS  selectedCampus  <- payload
//! ADD_CAMPUS     campuses        <- campuses ++ [payload]
//! (other)        state returned as-is
//! ```
//!
//! Every field the action does not name keeps the `Arc` it had in the
//! input snapshot. An unrecognized action returns the input `Arc` itself.

use std::sync::Arc;

use campus_core::{Campus, Student};
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Immutable snapshot of what the client shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    pub campuses: Arc<Vec<Arc<Campus>>>,
    pub selected_campus: Option<Arc<Campus>>,
    pub students: Arc<Vec<Student>>,
}

impl ApplicationState {
    /// The empty snapshot every store starts from.
    pub fn initial() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

/// Compute the next snapshot. Never mutates `state` and never fails.
pub fn reduce(state: &Arc<ApplicationState>, action: &Action) -> Arc<ApplicationState> {
    match action {
        Action::SetCampuses { campuses } => Arc::new(ApplicationState {
            campuses: Arc::clone(campuses),
            ..ApplicationState::clone(state)
        }),
        Action::SelectCampus { campus } => Arc::new(ApplicationState {
            selected_campus: Some(Arc::clone(campus)),
            ..ApplicationState::clone(state)
        }),
        Action::AddCampus { campus } => {
            let mut campuses = Vec::with_capacity(state.campuses.len() + 1);
            campuses.extend(state.campuses.iter().map(Arc::clone));
            campuses.push(Arc::clone(campus));
            Arc::new(ApplicationState {
                campuses: Arc::new(campuses),
                ..ApplicationState::clone(state)
            })
        }
        Action::Unrecognized => Arc::clone(state),
    }
}
