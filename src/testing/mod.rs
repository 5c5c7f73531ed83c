use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{http::StatusCode, response::Response};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::pronote::{Credentials, PronoteApi, PronoteError, PronoteResult, User};

/// Call recorded by [`MockPronote`]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Login { username: String, cas: Option<String> },
    Grades { period: Option<String> },
    Homework { from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>> },
    Timetable { from: DateTime<Utc>, to: DateTime<Utc> },
}

/// Scripted Pronote client: every call succeeds with the configured user or
/// payload, or fails with the configured error
pub struct MockPronote {
    user: User,
    payload: Value,
    failure: Option<PronoteError>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockPronote {
    pub fn new() -> Self {
        Self {
            user: User::default(),
            payload: json!([]),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn failing(mut self, err: PronoteError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: MockCall, ok: T) -> PronoteResult<T> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(ok),
        }
    }
}

#[async_trait]
impl PronoteApi for MockPronote {
    fn backend(&self) -> &'static str {
        "mock"
    }

    async fn login(&self, credentials: Credentials) -> PronoteResult<User> {
        let call = MockCall::Login {
            username: credentials.username,
            cas: credentials.cas,
        };
        self.record(call, self.user.clone())
    }

    async fn get_grades(&self, period: Option<String>) -> PronoteResult<Value> {
        self.record(MockCall::Grades { period }, self.payload.clone())
    }

    async fn get_homework(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> PronoteResult<Value> {
        self.record(MockCall::Homework { from, to }, self.payload.clone())
    }

    async fn get_timetable(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> PronoteResult<Value> {
        self.record(MockCall::Timetable { from, to }, self.payload.clone())
    }
}

impl AppState {
    /// State backed by a mock, returning the mock for call assertions
    pub fn with_mock(mock: MockPronote) -> (Self, Arc<MockPronote>) {
        let mock = Arc::new(mock);
        (AppState::new(mock.clone()), mock)
    }
}

/// Split a handler response into status and JSON body
pub async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("response body is not JSON");
    (status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls_even_when_failing() {
        let mock = MockPronote::new().failing(PronoteError::NotAuthenticated);

        assert!(mock.get_grades(None).await.is_err());
        assert_eq!(mock.calls(), vec![MockCall::Grades { period: None }]);
    }

    #[tokio::test]
    async fn test_state_reports_mock_backend() {
        let (state, _) = AppState::with_mock(MockPronote::new());
        assert_eq!(state.pronote.backend(), "mock");
    }
}
