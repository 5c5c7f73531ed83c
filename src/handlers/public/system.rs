use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Pronote Portal API",
            "version": version,
            "description": "School portal API proxying Pronote login, grades, homework and timetable",
            "endpoints": {
                "login": "POST /api/auth/login (public - opens the Pronote session)",
                "grades": "GET /api/grades?period= (requires login)",
                "homework": "GET /api/homework?from=&to= (requires login)",
                "timetable": "GET /api/timetable?from=&to= (requires login, both dates mandatory)",
                "health": "GET /health (public)",
            }
        }
    }))
}

/// GET /health - liveness plus the active Pronote backend
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "backend": state.pronote.backend(),
        }
    }))
}
