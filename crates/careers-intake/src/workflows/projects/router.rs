use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::ProjectShowcase;

pub fn projects_router(showcase: Arc<ProjectShowcase>) -> Router {
    Router::new()
        .route("/api/v1/projects", get(list_handler))
        .route("/api/v1/projects/:project_id", get(detail_handler))
        .with_state(showcase)
}

pub(crate) async fn list_handler(State(showcase): State<Arc<ProjectShowcase>>) -> Response {
    let payload = json!({
        "categories": showcase.categories(),
        "projects": showcase.projects(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn detail_handler(
    State(showcase): State<Arc<ProjectShowcase>>,
    Path(project_id): Path<u32>,
) -> Response {
    match showcase.find(project_id) {
        Some(project) => (StatusCode::OK, axum::Json(project.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("project {project_id} not found"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
