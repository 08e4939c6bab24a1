//! # OpenAPI Document Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the campus directory API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Directory API",
        version = "0.1.0",
        description = "Campuses, their student rosters, and roster grouping.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::campuses::list_campuses,
        crate::routes::campuses::create_campus,
        crate::routes::campuses::get_campus,
        crate::routes::campuses::list_students,
        crate::routes::campuses::create_student,
        crate::routes::campuses::campus_groups,
    ),
    components(schemas(
        campus_core::Campus,
        campus_core::Student,
        campus_core::CampusId,
        campus_core::StudentId,
        campus_core::Phase,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::campuses::CreateCampusRequest,
        crate::routes::campuses::CreateStudentRequest,
    )),
    tags(
        (name = "campuses", description = "Campus directory"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON document at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
