use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// How a mentoring session is conducted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionType {
    #[serde(rename = "VIDEO_CALL")]
    VideoCall,
    #[serde(rename = "CHAT")]
    Chat,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoCall => "VIDEO_CALL",
            Self::Chat => "CHAT",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "VIDEO_CALL" => Some(Self::VideoCall),
            "CHAT" => Some(Self::Chat),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VideoCall => "Video call",
            Self::Chat => "Chat",
        }
    }
}

/// A scheduled mentoring engagement (distinct from the authentication
/// session). Created by the backend; this client only edits `link` or
/// deletes the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MentoringSession {
    pub id: String,
    pub mentor: Participant,
    pub student: Participant,
    pub title: String,
    /// ISO-8601 date or datetime string, e.g. "2026-03-14".
    pub date: String,
    /// Wall-clock start, e.g. "14:30".
    pub date_hour: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Full-replace update body for a session, keyed by id on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub title: String,
    pub date: String,
    pub date_hour: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl SessionUpdate {
    /// Build an update that keeps everything but the meeting link.
    pub fn with_link(session: &MentoringSession, link: String) -> Self {
        Self {
            title: session.title.clone(),
            date: session.date.clone(),
            date_hour: session.date_hour.clone(),
            session_type: session.session_type,
            link: Some(link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn participant(id: &str, name: &str) -> Participant {
        Participant {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    #[test]
    fn session_type_roundtrip() {
        for ty in [SessionType::VideoCall, SessionType::Chat] {
            assert_eq!(SessionType::from_str_opt(ty.as_str()), Some(ty));
        }
        assert_eq!(SessionType::from_str_opt("PHONE"), None);
    }

    #[test]
    fn session_deserializes_with_type_keyword() {
        let json = r#"{
            "id": "s-1",
            "mentor": {"id": "m-1", "name": "Marta"},
            "student": {"id": "u-1", "name": "Ana"},
            "title": "Intro to ownership",
            "date": "2026-03-14",
            "dateHour": "14:30",
            "type": "VIDEO_CALL",
            "link": "https://meet.example/abc"
        }"#;
        let session: MentoringSession = serde_json::from_str(json).unwrap();

        assert_eq!(session.session_type, SessionType::VideoCall);
        assert_eq!(session.date_hour, "14:30");
        assert_eq!(session.link.as_deref(), Some("https://meet.example/abc"));
    }

    #[test]
    fn with_link_preserves_schedule_fields() {
        let session = MentoringSession {
            id: "s-1".into(),
            mentor: participant("m-1", "Marta"),
            student: participant("u-1", "Ana"),
            title: "Review".into(),
            date: "2026-03-14".into(),
            date_hour: "09:00".into(),
            session_type: SessionType::Chat,
            link: None,
        };

        let update = SessionUpdate::with_link(&session, "https://meet.example/x".into());
        assert_eq!(update.title, "Review");
        assert_eq!(update.date, "2026-03-14");
        assert_eq!(update.date_hour, "09:00");
        assert_eq!(update.session_type, SessionType::Chat);
        assert_eq!(update.link.as_deref(), Some("https://meet.example/x"));
    }
}
