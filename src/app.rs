use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers;
use crate::pronote::PronoteApi;

/// Shared by every handler; the Pronote client is the only long-lived piece
#[derive(Clone)]
pub struct AppState {
    pub pronote: Arc<dyn PronoteApi>,
}

impl AppState {
    pub fn new(pronote: Arc<dyn PronoteApi>) -> Self {
        Self { pronote }
    }
}

/// Routes only, no global middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(auth_routes())
        // Pronote data (needs a prior login)
        .merge(data_routes())
        .with_state(state)
}

/// Full application: routes plus CORS and request tracing per configuration
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut app = router(state);

    if config.security.enable_cors {
        app = app.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn auth_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new().route("/api/auth/login", post(auth::login_post))
}

fn data_routes() -> Router<AppState> {
    use handlers::protected;

    Router::new()
        .route("/api/grades", get(protected::grades_get))
        .route("/api/homework", get(protected::homework_get))
        .route("/api/timetable", get(protected::timetable_get))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
