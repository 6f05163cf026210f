use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantId, ApplicantQuery, NewApplicant, StatusUpdate};
use super::repository::{ApplicantRepository, RepositoryError};
use super::service::{ApplicantService, ApplicantServiceError};

/// Router builder exposing the applicant CRUD endpoints.
pub fn applicant_router<R>(service: Arc<ApplicantService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route(
            "/api/applicants",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/api/applicants/:id",
            axum::routing::put(update_status_handler::<R>).delete(delete_handler::<R>),
        )
        .with_state(service)
}

/// Raw query string for the list endpoint. Normalization (empty search,
/// unknown sort keys) happens in [`ApplicantQuery::from_params`].
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    pub(crate) search: Option<String>,
    pub(crate) sort: Option<String>,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let query = ApplicantQuery::from_params(params.search, params.sort);
    match service.list(&query) {
        Ok(applicants) => (StatusCode::OK, axum::Json(applicants)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    axum::Json(submission): axum::Json<NewApplicant>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.create(submission) {
        Ok(applicant) => (StatusCode::CREATED, axum::Json(applicant)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    Path(id): Path<i64>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.update_status(ApplicantId(id), update.status) {
        Ok(applicant) => (StatusCode::OK, axum::Json(applicant)).into_response(),
        Err(ApplicantServiceError::Repository(RepositoryError::NotFound)) => not_found(id),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<ApplicantService<R>>>,
    Path(id): Path<i64>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.delete(ApplicantId(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicantServiceError::Repository(RepositoryError::NotFound)) => not_found(id),
        Err(error) => internal_error(error),
    }
}

fn not_found(id: i64) -> Response {
    let payload = json!({
        "error": format!("applicant {id} not found"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: ApplicantServiceError) -> Response {
    tracing::error!(%error, "applicant request failed");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
