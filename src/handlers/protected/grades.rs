use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, QueryParams};
use crate::pronote::ErrorCode;

#[derive(Debug, Default, Deserialize)]
pub struct GradesQuery {
    pub period: Option<String>,
}

/// GET /api/grades?period= - grades for a period (client default when omitted)
pub async fn grades_get(State(state): State<AppState>, QueryParams(query): QueryParams<GradesQuery>) -> ApiResult<Value> {
    let grades = state
        .pronote
        .get_grades(query.period)
        .await
        .map_err(|e| ApiError::from_pronote(&e, ErrorCode::NotAuthenticated))?;

    Ok(ApiResponse::success("grades", grades))
}
