//! # Campus Routes
//!
//! ## Endpoints
//!
//! - `GET /api/campuses`: list campuses
//! - `POST /api/campuses`: create campus
//! - `GET /api/campuses/{id}`: get campus
//! - `GET /api/campuses/{id}/students`: campus roster
//! - `POST /api/campuses/{id}/students`: enroll a student at the campus
//! - `GET /api/campuses/{id}/groups?size=N`: roster split into groups of N
//!
//! Handlers only translate between HTTP and the repository; validation
//! lives in `campus_core::validate` and runs inside the repository.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use campus_core::{partition_owned, Campus, CampusId, GroupSize, NewCampus, NewStudent, Student};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::extractors::{extract_json, extract_path, extract_query};
use crate::state::AppState;

/// Request to create a campus.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampusRequest {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl From<CreateCampusRequest> for NewCampus {
    fn from(req: CreateCampusRequest) -> Self {
        Self {
            name: req.name,
            image_url: req.image_url,
            address: req.address,
            description: req.description,
        }
    }
}

/// Request to enroll a student. The campus comes from the path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// `junior`, `senior`, or omitted.
    pub phase: Option<String>,
}

/// Query for the grouping endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GroupsQuery {
    /// Students per group; must be a positive integer.
    pub size: i64,
}

/// Build the campus router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/campuses", get(list_campuses).post(create_campus))
        .route("/api/campuses/{id}", get(get_campus))
        .route(
            "/api/campuses/{id}/students",
            get(list_students).post(create_student),
        )
        .route("/api/campuses/{id}/groups", get(campus_groups))
}

/// Load a campus or fail with 404.
async fn require_campus(state: &AppState, id: CampusId) -> Result<Campus, AppError> {
    state
        .repo
        .get_campus(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))
}

/// GET /api/campuses: List all campuses.
#[utoipa::path(
    get,
    path = "/api/campuses",
    responses(
        (status = 200, description = "All campuses", body = Vec<Campus>),
    ),
    tag = "campuses"
)]
pub(crate) async fn list_campuses(State(state): State<AppState>) -> Result<Json<Vec<Campus>>, AppError> {
    Ok(Json(state.repo.list_campuses().await?))
}

/// POST /api/campuses: Create a campus.
#[utoipa::path(
    post,
    path = "/api/campuses",
    request_body = CreateCampusRequest,
    responses(
        (status = 201, description = "Campus created", body = Campus),
        (status = 400, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "campuses"
)]
pub(crate) async fn create_campus(
    State(state): State<AppState>,
    body: Result<Json<CreateCampusRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Campus>), AppError> {
    let req = extract_json(body)?;
    let campus = state.repo.create_campus(req.into()).await?;
    tracing::info!(campus_id = %campus.id, "campus created");
    Ok((StatusCode::CREATED, Json(campus)))
}

/// GET /api/campuses/{id}: Get a single campus.
#[utoipa::path(
    get,
    path = "/api/campuses/{id}",
    params(("id" = i64, Path, description = "Campus id")),
    responses(
        (status = 200, description = "Campus found", body = Campus),
        (status = 404, description = "Campus not found", body = crate::error::ErrorBody),
    ),
    tag = "campuses"
)]
pub(crate) async fn get_campus(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Campus>, AppError> {
    let id = CampusId(extract_path(id)?);
    Ok(Json(require_campus(&state, id).await?))
}

/// GET /api/campuses/{id}/students: Students of a campus.
#[utoipa::path(
    get,
    path = "/api/campuses/{id}/students",
    params(("id" = i64, Path, description = "Campus id")),
    responses(
        (status = 200, description = "Campus roster", body = Vec<Student>),
        (status = 404, description = "Campus not found", body = crate::error::ErrorBody),
    ),
    tag = "campuses"
)]
pub(crate) async fn list_students(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Student>>, AppError> {
    let id = CampusId(extract_path(id)?);
    require_campus(&state, id).await?;
    Ok(Json(state.repo.list_students_by_campus(id).await?))
}

/// POST /api/campuses/{id}/students: Enroll a student.
#[utoipa::path(
    post,
    path = "/api/campuses/{id}/students",
    params(("id" = i64, Path, description = "Campus id")),
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Validation error", body = crate::error::ErrorBody),
        (status = 404, description = "Campus not found", body = crate::error::ErrorBody),
    ),
    tag = "campuses"
)]
pub(crate) async fn create_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let id = CampusId(extract_path(id)?);
    let req = extract_json(body)?;
    require_campus(&state, id).await?;

    let student = state
        .repo
        .create_student(NewStudent {
            name: req.name,
            email: req.email,
            phase: req.phase,
            campus_id: Some(id),
        })
        .await?;
    tracing::info!(student_id = %student.id, campus_id = %id, "student enrolled");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/campuses/{id}/groups: Roster partitioned into groups.
#[utoipa::path(
    get,
    path = "/api/campuses/{id}/groups",
    params(("id" = i64, Path, description = "Campus id"), GroupsQuery),
    responses(
        (status = 200, description = "Student groups in roster order", body = Vec<Vec<Student>>),
        (status = 400, description = "Group size is not a positive integer", body = crate::error::ErrorBody),
        (status = 404, description = "Campus not found", body = crate::error::ErrorBody),
    ),
    tag = "campuses"
)]
pub(crate) async fn campus_groups(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<GroupsQuery>, QueryRejection>,
) -> Result<Json<Vec<Vec<Student>>>, AppError> {
    let id = CampusId(extract_path(id)?);
    let size = GroupSize::try_from(extract_query(query)?.size)?;
    require_campus(&state, id).await?;

    let roster = state.repo.list_students_by_campus(id).await?;
    Ok(Json(partition_owned(roster, size.get())?))
}
