use serde::{Deserialize, Serialize};

/// Platform role controlling which dashboard a user may enter.
///
/// The backend and browser storage carry upper-case tags (`ESTUDANTE`,
/// `ADMIN`, `MENTOR`); parsing is case-insensitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Student,
    Admin,
    Mentor,
}

impl UserRole {
    /// Parse a stored or wire role tag. Unknown values yield `None`.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ESTUDANTE" | "STUDENT" => Some(UserRole::Student),
            "ADMIN" => Some(UserRole::Admin),
            "MENTOR" => Some(UserRole::Mentor),
            _ => None,
        }
    }

    /// Upper-case tag written to browser storage and sent on the wire.
    pub fn storage_tag(&self) -> &'static str {
        match self {
            UserRole::Student => "ESTUDANTE",
            UserRole::Admin => "ADMIN",
            UserRole::Mentor => "MENTOR",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Admin => "Admin",
            UserRole::Mentor => "Mentor",
        }
    }
}

/// Minimal user reference embedded in messages, sessions, and rosters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Roster entry returned by the student/mentor listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request (`/registro`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Role tag requested at signup (`ESTUDANTE` or `MENTOR`).
    pub role: String,
}

/// Successful authentication payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user_id: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(UserRole::from_tag("ESTUDANTE"), Some(UserRole::Student));
        assert_eq!(UserRole::from_tag("estudante"), Some(UserRole::Student));
        assert_eq!(UserRole::from_tag("Mentor"), Some(UserRole::Mentor));
        assert_eq!(UserRole::from_tag("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_tag("  mentor "), Some(UserRole::Mentor));
    }

    #[test]
    fn role_rejects_unknown_tags() {
        assert_eq!(UserRole::from_tag("TEACHER"), None);
        assert_eq!(UserRole::from_tag(""), None);
        assert_eq!(UserRole::from_tag("superuser"), None);
    }

    #[test]
    fn role_storage_tag_roundtrip() {
        for role in [UserRole::Student, UserRole::Admin, UserRole::Mentor] {
            assert_eq!(UserRole::from_tag(role.storage_tag()), Some(role));
        }
    }

    #[test]
    fn login_response_deserializes_from_api_json() {
        let json = r#"{"token":"abc.def","role":"ESTUDANTE","userId":"u-17","name":"Ana"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.token, "abc.def");
        assert_eq!(resp.user_id, "u-17");
        assert_eq!(UserRole::from_tag(&resp.role), Some(UserRole::Student));
    }

    #[test]
    fn user_summary_tolerates_missing_optional_fields() {
        let json = r#"{"id":"u-2","name":"Rui"}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();

        assert_eq!(user.name, "Rui");
        assert_eq!(user.avatar_url, None);
        assert_eq!(user.email, "");
    }
}
