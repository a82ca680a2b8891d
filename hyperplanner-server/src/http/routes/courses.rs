//! Course endpoints: filtered read and bulk submission

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use hyperplanner_core::{build_filter, decode_component, Course, ValidationError};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Bulk submission body. A missing `courses` key means zero courses.
#[derive(Deserialize)]
pub struct CourseSubmission {
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Filtered read response
#[derive(Serialize)]
pub struct CourseList {
    pub length: usize,
    pub courses: Vec<Course>,
}

/// Bulk submission response
#[derive(Serialize)]
pub struct SubmissionSummary {
    pub length: usize,
}

/// Split a raw query string into key/value pairs. Keys are decoded here so
/// `c%61mpus` names the campus field; a key with a broken escape stays raw
/// and is ignored as unknown. Values stay encoded for `build_filter`.
fn query_pairs(raw: &str) -> impl Iterator<Item = (Cow<'_, str>, &str)> {
    raw.split('&').filter(|pair| !pair.is_empty()).map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key).map_or(Cow::Borrowed(key), Cow::Owned);
        (key, value)
    })
}

/// GET /courses - courses matching the campus/code/credits/title parameters
async fn list_courses(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<CourseList>, ApiError> {
    let query = query.unwrap_or_default();
    let filter = build_filter(query_pairs(&query))?;
    let courses = state.store.find_by_filter(&filter).await?;

    tracing::info!(fields = ?filter.fields(), count = courses.len(), "courses read");

    Ok(Json(CourseList {
        length: courses.len(),
        courses,
    }))
}

/// POST /courses - insert every course in the body
async fn submit_courses(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<SubmissionSummary>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Json(SubmissionSummary { length: 0 }));
    }

    let submission: CourseSubmission =
        serde_json::from_str(&body).map_err(|e| ValidationError::InvalidBody {
            reason: e.to_string(),
        })?;

    let length = state.store.insert_many(&submission.courses).await?;
    tracing::info!(length, "courses inserted");

    Ok(Json(SubmissionSummary { length }))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/courses", get(list_courses).post(submit_courses))
}
