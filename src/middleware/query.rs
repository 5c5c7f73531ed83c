use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Query string extractor; a repeated key keeps its first value and any
/// rejection uses the API failure envelope
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                ApiError::bad_request(rejection.body_text())
            })?;

        from_pairs(pairs).map(Self)
    }
}

fn from_pairs<T: DeserializeOwned>(pairs: Vec<(String, String)>) -> Result<T, ApiError> {
    let mut params = Map::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(params)).map_err(|e| {
        tracing::debug!("Rejected query parameters: {}", e);
        ApiError::bad_request(format!("Paramètres invalides: {}", e))
    })
}
