//! Named-operation endpoint
//!
//! Accepts `{ "field": "getCourses" | "addCourses", "arguments": {...} }`
//! and answers with the raw course array.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use hyperplanner_core::{Course, OperationRequest};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// POST /operations - resolve one named operation
async fn run_operation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OperationRequest>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let field = request.field.clone();
    let courses = state.dispatcher.handle(request).await?;

    tracing::info!(operation = %field, count = courses.len(), "operation resolved");
    Ok(Json(courses))
}

/// Operation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/operations", post(run_operation))
}
