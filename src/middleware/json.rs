use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejection uses the API failure envelope.
///
/// The body is parsed whatever the `Content-Type` header says.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Failed to read request body: {}", rejection.body_text());
            ApiError::invalid_json(rejection.body_text())
        })?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                tracing::debug!("Rejected request body: {}", e);
                Err(ApiError::invalid_json(format!("Invalid JSON body: {}", e)))
            }
        }
    }
}
