use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by a Pronote client backend
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PronoteError {
    #[error("Wrong credentials: {0}")]
    WrongCredentials(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error ({code}): {message}")]
    Upstream { code: String, message: String },

    #[error("{0}")]
    Other(String),
}

/// Stable codes handed to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    WrongCredentials,
    NotAuthenticated,
    SessionExpired,
    NetworkError,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::WrongCredentials => "WRONG_CREDENTIALS",
            ErrorCode::NotAuthenticated => "NOT_AUTHENTICATED",
            ErrorCode::SessionExpired => "SESSION_EXPIRED",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "WRONG_CREDENTIALS" => Some(ErrorCode::WrongCredentials),
            "NOT_AUTHENTICATED" => Some(ErrorCode::NotAuthenticated),
            "SESSION_EXPIRED" => Some(ErrorCode::SessionExpired),
            "NETWORK_ERROR" => Some(ErrorCode::NetworkError),
            "UNKNOWN_ERROR" => Some(ErrorCode::UnknownError),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-facing view of a [`PronoteError`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedError {
    pub message: String,
    pub code: ErrorCode,
}

/// Convert any client failure into a `{message, code}` pair.
///
/// This is the only place where client errors are interpreted; routes just
/// pick a status code from the resulting `code`.
pub fn translate(err: &PronoteError) -> TranslatedError {
    let (message, code) = match err {
        PronoteError::WrongCredentials(_) => (
            "Identifiants incorrects".to_string(),
            ErrorCode::WrongCredentials,
        ),
        PronoteError::NotAuthenticated => (
            "Non authentifié, veuillez vous connecter".to_string(),
            ErrorCode::NotAuthenticated,
        ),
        PronoteError::SessionExpired => (
            "Session expirée, veuillez vous reconnecter".to_string(),
            ErrorCode::SessionExpired,
        ),
        PronoteError::Network(_) => (
            "Impossible de joindre le serveur Pronote".to_string(),
            ErrorCode::NetworkError,
        ),
        PronoteError::Upstream { code, message } => match ErrorCode::parse(code) {
            Some(known) => (message.clone(), known),
            None => (message.clone(), ErrorCode::UnknownError),
        },
        PronoteError::Other(message) if !message.is_empty() => {
            (message.clone(), ErrorCode::UnknownError)
        }
        PronoteError::Other(_) => ("Erreur inconnue".to_string(), ErrorCode::UnknownError),
    };

    TranslatedError { message, code }
}
