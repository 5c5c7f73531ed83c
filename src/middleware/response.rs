use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Wrapper for API responses that adds the `{success: true, <key>: data}` envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub key: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response (always 200)
    pub fn success(key: &'static str, data: T) -> Self {
        Self { key, data }
    }

    /// Envelope as a JSON value
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let data_value = serde_json::to_value(&self.data)?;

        let mut envelope = Map::new();
        envelope.insert("success".into(), Value::Bool(true));
        envelope.insert(self.key.into(), data_value);
        Ok(Value::Object(envelope))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.to_json() {
            Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Failed to serialize response data"
                    })),
                )
                    .into_response()
            }
        }
    }
}

// Convenience type alias
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
