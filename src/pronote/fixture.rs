use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use super::client::{PronoteApi, PronoteResult};
use super::dates::parse_date;
use super::error::PronoteError;
use super::models::{Credentials, StudentClass, User};

/// Account the fixture backend accepts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureAccount {
    pub url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturePeriod {
    pub name: String,
    pub grades: Value,
}

/// Everything the fixture backend serves.
///
/// Homework entries are filtered on their `dueDate` field and timetable
/// lessons on their `from` field; both must be dates `parse_date` accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureData {
    pub account: FixtureAccount,
    pub user: User,
    pub periods: Vec<FixturePeriod>,
    #[serde(default)]
    pub homework: Vec<Value>,
    #[serde(default)]
    pub timetable: Vec<Value>,
}

impl FixtureData {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture file {}", path.display()))?;
        let data: FixtureData = serde_json::from_str(&raw)
            .with_context(|| format!("invalid fixture file {}", path.display()))?;

        if data.periods.is_empty() {
            anyhow::bail!("fixture file {} declares no grading period", path.display());
        }

        Ok(data)
    }

    /// Built-in demonstration account
    pub fn demo() -> Self {
        Self {
            account: FixtureAccount {
                url: "https://demo.index-education.net/pronote/eleve.html".to_string(),
                username: "demonstration".to_string(),
                password: "pronotevs".to_string(),
            },
            user: User {
                name: Some("Camille Martin".to_string()),
                student_class: Some(StudentClass { name: Some("3eB".to_string()) }),
                establishment: Some("Collège Jean Moulin".to_string()),
            },
            periods: vec![
                FixturePeriod {
                    name: "Trimestre 1".to_string(),
                    grades: json!([
                        { "subject": "Mathématiques", "value": 15.5, "outOf": 20, "coefficient": 2, "date": "2023-10-12" },
                        { "subject": "Français", "value": 13, "outOf": 20, "coefficient": 1, "date": "2023-10-20" },
                        { "subject": "Histoire-Géographie", "value": 17, "outOf": 20, "coefficient": 1, "date": "2023-11-08" }
                    ]),
                },
                FixturePeriod {
                    name: "Trimestre 2".to_string(),
                    grades: json!([
                        { "subject": "Mathématiques", "value": 12, "outOf": 20, "coefficient": 2, "date": "2024-01-11" },
                        { "subject": "Anglais", "value": 16, "outOf": 20, "coefficient": 1, "date": "2024-01-18" }
                    ]),
                },
            ],
            homework: vec![
                json!({ "subject": "Mathématiques", "description": "Exercices 12 à 15 page 84", "dueDate": "2024-01-15", "done": false }),
                json!({ "subject": "Français", "description": "Lire le chapitre 3", "dueDate": "2024-01-17", "done": true }),
                json!({ "subject": "Anglais", "description": "Apprendre le vocabulaire", "dueDate": "2024-01-22", "done": false }),
            ],
            timetable: vec![
                json!({ "subject": "Mathématiques", "teacher": "M. Durand", "room": "B12", "from": "2024-01-15T08:00:00Z", "to": "2024-01-15T09:00:00Z", "cancelled": false }),
                json!({ "subject": "Anglais", "teacher": "Mme Leroy", "room": "A03", "from": "2024-01-15T09:00:00Z", "to": "2024-01-15T10:00:00Z", "cancelled": false }),
                json!({ "subject": "Français", "teacher": "Mme Petit", "room": "C21", "from": "2024-01-16T10:00:00Z", "to": "2024-01-16T11:00:00Z", "cancelled": true }),
            ],
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    username: String,
    logged_in_at: DateTime<Utc>,
}

/// Pronote backend serving static data, used for local development and tests
pub struct FixtureClient {
    data: FixtureData,
    session: RwLock<Option<Session>>,
}

impl FixtureClient {
    pub fn new(data: FixtureData) -> Self {
        Self {
            data,
            session: RwLock::new(None),
        }
    }

    pub fn demo() -> Self {
        Self::new(FixtureData::demo())
    }

    async fn require_session(&self) -> PronoteResult<Session> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(PronoteError::NotAuthenticated)
    }
}

#[async_trait]
impl PronoteApi for FixtureClient {
    fn backend(&self) -> &'static str {
        "fixture"
    }

    async fn login(&self, credentials: Credentials) -> PronoteResult<User> {
        if credentials.url.trim().is_empty() {
            return Err(PronoteError::Other("URL de l'instance Pronote manquante".to_string()));
        }

        let account = &self.data.account;
        if credentials.username != account.username || credentials.password != account.password {
            return Err(PronoteError::WrongCredentials("identifiants refusés".to_string()));
        }

        let session = Session {
            username: credentials.username,
            logged_in_at: Utc::now(),
        };
        tracing::debug!("Fixture session opened for '{}' at {}", session.username, session.logged_in_at);
        *self.session.write().await = Some(session);

        Ok(self.data.user.clone())
    }

    async fn get_grades(&self, period: Option<String>) -> PronoteResult<Value> {
        self.require_session().await?;

        let selected = match period.as_deref() {
            Some(name) => self
                .data
                .periods
                .iter()
                .find(|p| p.name == name)
                .ok_or_else(|| PronoteError::Other(format!("Période inconnue: {}", name)))?,
            None => self
                .data
                .periods
                .last()
                .ok_or_else(|| PronoteError::Other("Aucune période disponible".to_string()))?,
        };

        Ok(json!({
            "period": selected.name,
            "grades": selected.grades,
        }))
    }

    async fn get_homework(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> PronoteResult<Value> {
        self.require_session().await?;

        // Due dates are calendar days
        let from = from.map(|d| d.date_naive());
        let to = to.map(|d| d.date_naive());

        let items: Vec<Value> = self
            .data
            .homework
            .iter()
            .filter(|item| within(entry_date(item, "dueDate").map(|d| d.date_naive()), from, to))
            .cloned()
            .collect();

        Ok(Value::Array(items))
    }

    async fn get_timetable(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> PronoteResult<Value> {
        self.require_session().await?;

        // Lessons are kept when their start instant falls inside the range
        let lessons: Vec<Value> = self
            .data
            .timetable
            .iter()
            .filter(|lesson| within(entry_date(lesson, "from"), Some(from), Some(to)))
            .cloned()
            .collect();

        Ok(Value::Array(lessons))
    }
}

fn entry_date(entry: &Value, field: &str) -> Option<DateTime<Utc>> {
    entry.get(field).and_then(Value::as_str).and_then(parse_date)
}

// Entries without a readable date are only kept when no bound applies.
fn within<T: PartialOrd>(date: Option<T>, from: Option<T>, to: Option<T>) -> bool {
    match date {
        Some(date) => from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t),
        None => from.is_none() && to.is_none(),
    }
}
