//! # Async Action Creators
//!
//! Each creator awaits the repository, then dispatches one plain action.
//! When the repository call fails nothing is dispatched and the error is
//! returned to the caller unchanged.

use std::sync::Arc;

use campus_core::{Campus, CampusId, CampusRepository, NewCampus, RepositoryError};

use crate::action::Action;
use crate::reducer::ApplicationState;
use crate::store::Store;

/// Load every campus and dispatch `SET_CAMPUSES`.
pub async fn fetch_campuses(
    store: &Store,
    repo: &dyn CampusRepository,
) -> Result<Arc<ApplicationState>, RepositoryError> {
    let campuses = repo.list_campuses().await?;
    tracing::debug!(count = campuses.len(), "campuses fetched");
    Ok(store.dispatch(Action::load_campuses(campuses)))
}

/// Load one campus and dispatch `SELECT_CAMPUS`.
pub async fn fetch_campus(
    store: &Store,
    repo: &dyn CampusRepository,
    id: CampusId,
) -> Result<Arc<ApplicationState>, RepositoryError> {
    let campus = repo
        .get_campus(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
    Ok(store.dispatch(Action::select_campus(campus)))
}

/// Create a campus and dispatch `ADD_CAMPUS` with the stored record.
pub async fn post_campus(
    store: &Store,
    repo: &dyn CampusRepository,
    new: NewCampus,
) -> Result<Campus, RepositoryError> {
    let campus = repo.create_campus(new).await?;
    store.dispatch(Action::add_campus(campus.clone()));
    Ok(campus)
}
