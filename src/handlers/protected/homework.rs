use axum::extract::State;
use serde_json::Value;

use super::utils::{optional_date, DateRangeQuery};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, QueryParams};
use crate::pronote::ErrorCode;

/// GET /api/homework?from=&to= - homework, optionally bounded by due date
///
/// Absent bounds reach the client as `None`. A bound that is present but not
/// a date is rejected with 400 `Dates invalides` instead of being forwarded.
pub async fn homework_get(State(state): State<AppState>, QueryParams(query): QueryParams<DateRangeQuery>) -> ApiResult<Value> {
    let from = optional_date(&query.from)?;
    let to = optional_date(&query.to)?;

    let homework = state
        .pronote
        .get_homework(from, to)
        .await
        .map_err(|e| ApiError::from_pronote(&e, ErrorCode::NotAuthenticated))?;

    Ok(ApiResponse::success("homework", homework))
}
