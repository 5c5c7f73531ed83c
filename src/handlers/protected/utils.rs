use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;
use crate::pronote::dates::parse_date;

pub const MISSING_DATES_MESSAGE: &str = "Paramètres from et to requis";
pub const INVALID_DATES_MESSAGE: &str = "Dates invalides";

/// `?from=&to=` query shared by homework and timetable
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

// Empty strings count as absent.
fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// Parse an optional date; absent stays `None`, unparseable is a 400
pub fn optional_date(param: &Option<String>) -> Result<Option<DateTime<Utc>>, ApiError> {
    match present(param) {
        None => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(INVALID_DATES_MESSAGE)),
    }
}

/// Both bounds are mandatory; missing is checked before validity
pub fn required_range(query: &DateRangeQuery) -> Result<(DateTime<Utc>, DateTime<Utc>), ApiError> {
    let (Some(from), Some(to)) = (present(&query.from), present(&query.to)) else {
        return Err(ApiError::bad_request(MISSING_DATES_MESSAGE));
    };

    match (parse_date(from), parse_date(to)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(ApiError::bad_request(INVALID_DATES_MESSAGE)),
    }
}
