use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::error::PronoteError;
use super::models::{Credentials, User};

pub type PronoteResult<T> = Result<T, PronoteError>;

/// Operations the portal needs from a Pronote client.
///
/// Implementations own whatever session state the backend needs; the routes
/// only see these four calls. Grades, homework and timetable payloads are
/// passed through to callers unchanged.
#[async_trait]
pub trait PronoteApi: Send + Sync {
    /// Short backend name reported by `/health`
    fn backend(&self) -> &'static str;

    async fn login(&self, credentials: Credentials) -> PronoteResult<User>;

    async fn get_grades(&self, period: Option<String>) -> PronoteResult<Value>;

    async fn get_homework(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> PronoteResult<Value>;

    async fn get_timetable(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> PronoteResult<Value>;
}
