// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::pronote::{translate, ErrorCode, PronoteError};

/// HTTP API error rendered as the `{success: false, error, code?}` envelope
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    // 400 Bad Request (request shape, never reaches the Pronote client)
    BadRequest(String),
    InvalidJson(String),

    // 401 Unauthorized
    Unauthorized { message: String, code: ErrorCode },

    // 500 Internal Server Error
    InternalServerError { message: String, code: ErrorCode },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::InvalidJson(_) => 400,
            ApiError::Unauthorized { .. } => 401,
            ApiError::InternalServerError { .. } => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidJson(msg) => msg,
            ApiError::Unauthorized { message, .. } => message,
            ApiError::InternalServerError { message, .. } => message,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            ApiError::BadRequest(_) => None,
            ApiError::InvalidJson(_) => Some("INVALID_JSON"),
            ApiError::Unauthorized { code, .. } => Some(code.as_str()),
            ApiError::InternalServerError { code, .. } => Some(code.as_str()),
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut response = json!({
            "success": false,
            "error": self.message(),
        });

        if let Some(code) = self.error_code() {
            response["code"] = json!(code);
        }

        response
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    /// Translate a client failure and pick its status.
    ///
    /// `unauthorized_on` is the single code that maps to 401 for the calling
    /// route; every other code maps to 500.
    pub fn from_pronote(err: &PronoteError, unauthorized_on: ErrorCode) -> Self {
        let translated = translate(err);

        if translated.code == unauthorized_on {
            tracing::warn!("Pronote request rejected ({}): {}", translated.code, err);
            ApiError::Unauthorized {
                message: translated.message,
                code: translated.code,
            }
        } else {
            tracing::error!("Pronote request failed ({}): {}", translated.code, err);
            ApiError::InternalServerError {
                message: translated.message,
                code: translated.code,
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_has_no_code() {
        let body = ApiError::bad_request("Dates invalides").to_json();
        assert_eq!(body, json!({ "success": false, "error": "Dates invalides" }));
    }

    #[test]
    fn test_invalid_json_is_400_with_code() {
        let err = ApiError::invalid_json("expected value");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_json()["code"], "INVALID_JSON");
    }

    #[test]
    fn test_from_pronote_matching_code_is_401() {
        let err = ApiError::from_pronote(
            &PronoteError::WrongCredentials("x".into()),
            ErrorCode::WrongCredentials,
        );
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.to_json()["code"], "WRONG_CREDENTIALS");
    }

    #[test]
    fn test_from_pronote_other_codes_are_500() {
        // Not-authenticated is only a 401 where the route asks for it.
        let err = ApiError::from_pronote(&PronoteError::NotAuthenticated, ErrorCode::WrongCredentials);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), Some("NOT_AUTHENTICATED"));

        let err = ApiError::from_pronote(&PronoteError::Other("boom".into()), ErrorCode::NotAuthenticated);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_json()["error"], "boom");
        assert_eq!(err.to_json()["success"], false);
    }
}
