use axum::extract::State;
use serde_json::Value;

use super::utils::{required_range, DateRangeQuery};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, QueryParams};
use crate::pronote::ErrorCode;

/// GET /api/timetable?from=&to= - lessons between two mandatory dates
///
/// 400 `Paramètres from et to requis` when a bound is missing,
/// 400 `Dates invalides` when one does not parse.
pub async fn timetable_get(State(state): State<AppState>, QueryParams(query): QueryParams<DateRangeQuery>) -> ApiResult<Value> {
    let (from, to) = required_range(&query)?;

    let timetable = state
        .pronote
        .get_timetable(from, to)
        .await
        .map_err(|e| ApiError::from_pronote(&e, ErrorCode::NotAuthenticated))?;

    Ok(ApiResponse::success("timetable", timetable))
}
