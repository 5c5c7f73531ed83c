use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_NAME: &str = "Utilisateur";
pub const UNDEFINED_LABEL: &str = "Non défini";

/// Login input forwarded to the Pronote client. Never persisted.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct Credentials {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
}

// Password stays out of logs and panics.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("cas", &self.cas)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StudentClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// User as reported by the Pronote client after login.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_class: Option<StudentClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub establishment: Option<String>,
}

/// User echoed back by the login route, every field filled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalUser {
    pub name: String,
    pub student_class: String,
    pub establishment: String,
}

impl From<User> for PortalUser {
    fn from(user: User) -> Self {
        let class_name = user.student_class.and_then(|class| class.name);

        Self {
            name: non_empty_or(user.name, DEFAULT_USER_NAME),
            student_class: non_empty_or(class_name, UNDEFINED_LABEL),
            establishment: non_empty_or(user.establishment, UNDEFINED_LABEL),
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}
