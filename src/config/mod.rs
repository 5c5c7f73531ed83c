use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub pronote: PronoteConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PronoteBackend {
    Fixture,
    Sidecar,
}

impl PronoteBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixture" | "demo" => Some(PronoteBackend::Fixture),
            "sidecar" | "bridge" => Some(PronoteBackend::Sidecar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronoteConfig {
    pub backend: PronoteBackend,
    pub sidecar_url: String,
    pub request_timeout_secs: u64,
    pub fixture_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORTAL_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("PORTAL_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Pronote overrides
        if let Ok(v) = env::var("PRONOTE_BACKEND") {
            match PronoteBackend::parse(&v) {
                Some(backend) => self.pronote.backend = backend,
                None => tracing::warn!("Ignoring unknown PRONOTE_BACKEND '{}'", v),
            }
        }
        if let Ok(v) = env::var("PRONOTE_SIDECAR_URL") {
            self.pronote.sidecar_url = v;
        }
        if let Ok(v) = env::var("PRONOTE_TIMEOUT_SECS") {
            match parse_timeout_secs(&v) {
                Some(secs) => self.pronote.request_timeout_secs = secs,
                None => tracing::warn!("Ignoring invalid PRONOTE_TIMEOUT_SECS '{}'", v),
            }
        }
        if let Ok(v) = env::var("PRONOTE_FIXTURE_PATH") {
            self.pronote.fixture_path = Some(v).filter(|p| !p.is_empty());
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            pronote: PronoteConfig {
                backend: PronoteBackend::Fixture,
                sidecar_url: "http://127.0.0.1:4000".to_string(),
                request_timeout_secs: 30,
                fixture_path: None,
            },
            api: ApiConfig {
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            pronote: PronoteConfig {
                backend: PronoteBackend::Sidecar,
                sidecar_url: "http://127.0.0.1:4000".to_string(),
                request_timeout_secs: 20,
                fixture_path: None,
            },
            api: ApiConfig {
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            pronote: PronoteConfig {
                backend: PronoteBackend::Sidecar,
                sidecar_url: "http://127.0.0.1:4000".to_string(),
                request_timeout_secs: 15,
                fixture_path: None,
            },
            api: ApiConfig {
                enable_request_logging: false,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[macro_export]
macro_rules! is_production {
    () => {
        matches!($crate::config::CONFIG.environment, $crate::config::Environment::Production)
    };
}

// A zero timeout would fail every bridge call.
fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
