//! Pure decision logic for the schedule page's session operations.

use shared_types::{MentoringSession, SessionType};

/// What starting a session should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Video call with a usable link: open it in a new browsing context.
    OpenLink(String),
    /// Chat session may begin (or is already the active one).
    BeginChat,
    /// Another chat session is active; reject with no state change.
    SecondChatRejected,
    /// Video call without a meeting link.
    MissingLink,
}

/// Decide how to start `session` given the currently active chat session,
/// if any. The single-active-chat rule is client-held and advisory only.
pub fn start_outcome(session: &MentoringSession, active_chat: Option<&str>) -> StartOutcome {
    match session.session_type {
        SessionType::VideoCall => match session.link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => StartOutcome::OpenLink(link.to_string()),
            _ => StartOutcome::MissingLink,
        },
        SessionType::Chat => match active_chat {
            Some(active) if active != session.id => StartOutcome::SecondChatRejected,
            _ => StartOutcome::BeginChat,
        },
    }
}

/// A usable meeting link, or `None` for empty/whitespace-only input. The
/// edit flow must not issue a network call when this returns `None`.
pub fn validate_link(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Keep only sessions owned by the given mentor.
pub fn owned_by(sessions: Vec<MentoringSession>, mentor_id: &str) -> Vec<MentoringSession> {
    sessions
        .into_iter()
        .filter(|s| s.mentor.id == mentor_id)
        .collect()
}

/// Replace a session in place by id with the server's representation.
pub fn replace_session(sessions: &mut [MentoringSession], updated: MentoringSession) {
    if let Some(slot) = sessions.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}

/// Drop a session from the committed list.
pub fn remove_session(sessions: &mut Vec<MentoringSession>, id: &str) {
    sessions.retain(|s| s.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Participant;

    fn session(id: &str, mentor: &str, ty: SessionType, link: Option<&str>) -> MentoringSession {
        MentoringSession {
            id: id.into(),
            mentor: Participant {
                id: mentor.into(),
                name: mentor.into(),
                avatar_url: None,
            },
            student: Participant {
                id: "u-1".into(),
                name: "Ana".into(),
                avatar_url: None,
            },
            title: "Session".into(),
            date: "2026-03-14".into(),
            date_hour: "10:00".into(),
            session_type: ty,
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn video_call_opens_its_link() {
        let s = session("s1", "m-1", SessionType::VideoCall, Some(" https://meet/x "));
        assert_eq!(
            start_outcome(&s, None),
            StartOutcome::OpenLink("https://meet/x".into())
        );
    }

    #[test]
    fn video_call_without_link_is_rejected() {
        let s = session("s1", "m-1", SessionType::VideoCall, None);
        assert_eq!(start_outcome(&s, None), StartOutcome::MissingLink);

        let blank = session("s2", "m-1", SessionType::VideoCall, Some("   "));
        assert_eq!(start_outcome(&blank, None), StartOutcome::MissingLink);
    }

    #[test]
    fn second_chat_session_is_rejected() {
        let s = session("s2", "m-1", SessionType::Chat, None);
        assert_eq!(
            start_outcome(&s, Some("s1")),
            StartOutcome::SecondChatRejected
        );
    }

    #[test]
    fn chat_start_allowed_when_idle_or_already_active() {
        let s = session("s1", "m-1", SessionType::Chat, None);
        assert_eq!(start_outcome(&s, None), StartOutcome::BeginChat);
        assert_eq!(start_outcome(&s, Some("s1")), StartOutcome::BeginChat);
    }

    #[test]
    fn link_validation_rejects_whitespace() {
        assert_eq!(validate_link(""), None);
        assert_eq!(validate_link("   \t"), None);
        assert_eq!(validate_link("  https://meet/x "), Some("https://meet/x".into()));
    }

    #[test]
    fn owned_by_filters_other_mentors() {
        let sessions = vec![
            session("s1", "m-1", SessionType::Chat, None),
            session("s2", "m-2", SessionType::Chat, None),
        ];

        let mine = owned_by(sessions, "m-1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "s1");
    }

    #[test]
    fn replace_swaps_matching_id_only() {
        let mut sessions = vec![
            session("s1", "m-1", SessionType::VideoCall, None),
            session("s2", "m-1", SessionType::VideoCall, None),
        ];
        let updated = session("s2", "m-1", SessionType::VideoCall, Some("https://meet/x"));

        replace_session(&mut sessions, updated);

        assert_eq!(sessions[0].link, None);
        assert_eq!(sessions[1].link.as_deref(), Some("https://meet/x"));
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut sessions = vec![
            session("s1", "m-1", SessionType::Chat, None),
            session("s2", "m-1", SessionType::Chat, None),
        ];

        remove_session(&mut sessions, "s1");

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "s2");
    }
}
