// handlers/public/auth/login.rs - POST /api/auth/login handler

use axum::extract::State;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::pronote::{Credentials, ErrorCode, PortalUser};

/// POST /api/auth/login - Log the Pronote client in and echo the user
///
/// Expected Input:
/// ```json
/// {
///   "url": "https://0000000a.index-education.net/pronote/eleve.html",
///   "username": "string",
///   "password": "string",
///   "cas": "string"         // Optional: ENT/CAS name
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "user": {
///     "name": "Camille Martin",
///     "studentClass": "3eB",
///     "establishment": "Collège Jean Moulin"
///   }
/// }
/// ```
///
/// Missing user fields are replaced by `"Utilisateur"` / `"Non défini"`.
/// Failures answer 401 for `WRONG_CREDENTIALS` and 500 for anything else.
pub async fn login_post(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> ApiResult<PortalUser> {
    tracing::info!("Login attempt (cas: {})", credentials.cas.as_deref().unwrap_or("none"));

    let user = state
        .pronote
        .login(credentials)
        .await
        .map_err(|e| ApiError::from_pronote(&e, ErrorCode::WrongCredentials))?;

    Ok(ApiResponse::success("user", PortalUser::from(user)))
}
