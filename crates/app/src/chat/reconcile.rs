//! Conversation-list reconciliation. Both chat roles share this logic;
//! only the roster endpoint differs.

use chrono::NaiveDateTime;
use shared_types::{Message, UserSummary};

/// Summary of a one-to-one conversation partner, rebuilt from the message
/// history on every mount.
#[derive(Debug, Clone, PartialEq)]
pub struct Counterpart {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub last_message: Option<String>,
    pub last_message_time: Option<String>,
    pub unread: bool,
}

impl Counterpart {
    fn from_roster(user: &UserSummary) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            last_message: None,
            last_message_time: None,
            unread: false,
        }
    }
}

/// Parse a message timestamp. Accepts RFC 3339 and bare
/// `YYYY-MM-DDTHH:MM:SS`; anything else is treated as absent.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Build one counterpart record per conversation partner from the union
/// of sent and received messages (in that order).
///
/// The preview keeps the first-encountered message unless a later one in
/// the stream carries a strictly later parseable timestamp; timestamps
/// are frequently absent, in which case concatenation order decides.
pub fn build_counterparts(sent: &[Message], received: &[Message], me: &str) -> Vec<Counterpart> {
    let mut counterparts: Vec<Counterpart> = Vec::new();

    for message in sent.iter().chain(received.iter()) {
        let incoming = message.sender.id != me;
        let other = if incoming {
            &message.sender
        } else {
            &message.recipient
        };
        if other.id == me {
            continue;
        }

        let unread_here = incoming && !message.read;

        match counterparts.iter_mut().find(|c| c.id == other.id) {
            Some(existing) => {
                existing.unread |= unread_here;
                let newer = match (
                    existing
                        .last_message_time
                        .as_deref()
                        .and_then(parse_timestamp),
                    message.sent_at.as_deref().and_then(parse_timestamp),
                ) {
                    (Some(current), Some(candidate)) => candidate > current,
                    _ => false,
                };
                if newer {
                    existing.last_message = Some(message.content.clone());
                    existing.last_message_time = message.sent_at.clone();
                }
            }
            None => counterparts.push(Counterpart {
                id: other.id.clone(),
                name: other.name.clone(),
                avatar_url: other.avatar_url.clone(),
                last_message: Some(message.content.clone()),
                last_message_time: message.sent_at.clone(),
                unread: unread_here,
            }),
        }
    }

    sort_by_recency(&mut counterparts);
    counterparts
}

/// Most recent conversation first; entries without a parseable timestamp
/// sort last, and ties keep their relative order (stable sort).
fn sort_by_recency(counterparts: &mut [Counterpart]) {
    counterparts.sort_by(|a, b| {
        let ta = a.last_message_time.as_deref().and_then(parse_timestamp);
        let tb = b.last_message_time.as_deref().and_then(parse_timestamp);
        match (ta, tb) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}

/// Roster minus counterparts that already have history: the "available,
/// no chat yet" list.
pub fn available_counterparts(
    roster: &[UserSummary],
    with_history: &[Counterpart],
) -> Vec<Counterpart> {
    roster
        .iter()
        .filter(|user| !with_history.iter().any(|c| c.id == user.id))
        .map(Counterpart::from_roster)
        .collect()
}

/// Case-insensitive substring filter, applied on every keystroke.
pub fn filter_by_query(counterparts: &[Counterpart], query: &str) -> Vec<Counterpart> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return counterparts.to_vec();
    }
    counterparts
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Record a successful send: the counterpart leaves the available list,
/// takes the sent message as its preview, and moves to the head of the
/// conversation list. Idempotent with respect to membership.
pub fn record_send(
    with_chats: &mut Vec<Counterpart>,
    available: &mut Vec<Counterpart>,
    counterpart: &Counterpart,
    content: &str,
    sent_at: Option<&str>,
) {
    available.retain(|c| c.id != counterpart.id);

    let mut entry = match with_chats.iter().position(|c| c.id == counterpart.id) {
        Some(position) => with_chats.remove(position),
        None => counterpart.clone(),
    };
    entry.last_message = Some(content.to_string());
    entry.last_message_time = sent_at.map(str::to_string);
    with_chats.insert(0, entry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Participant;

    fn user(id: &str, name: &str) -> Participant {
        Participant {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    fn message(id: &str, from: &str, to: &str, content: &str, sent_at: Option<&str>) -> Message {
        Message {
            id: id.into(),
            sender: user(from, from),
            recipient: user(to, to),
            content: content.into(),
            sent_at: sent_at.map(str::to_string),
            read: true,
        }
    }

    fn summary(id: &str, name: &str) -> UserSummary {
        UserSummary {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            avatar_url: None,
        }
    }

    #[test]
    fn both_directions_collapse_to_one_counterpart() {
        // Current user is B; A wrote and was written to.
        let sent = vec![message("m1", "B", "A", "x", None)];
        let received = vec![message("m2", "A", "B", "y", None)];

        let counterparts = build_counterparts(&sent, &received, "B");

        assert_eq!(counterparts.len(), 1);
        assert_eq!(counterparts[0].id, "A");
        // No timestamps: the first message in sent-then-received order wins.
        assert_eq!(counterparts[0].last_message.as_deref(), Some("x"));
    }

    #[test]
    fn preview_prefers_later_parseable_timestamp() {
        let sent = vec![message("m1", "B", "A", "old", Some("2026-02-01T10:00:00Z"))];
        let received = vec![message("m2", "A", "B", "new", Some("2026-02-03T08:00:00Z"))];

        let counterparts = build_counterparts(&sent, &received, "B");

        assert_eq!(counterparts[0].last_message.as_deref(), Some("new"));
        assert_eq!(
            counterparts[0].last_message_time.as_deref(),
            Some("2026-02-03T08:00:00Z")
        );
    }

    #[test]
    fn sorts_by_recency_with_missing_timestamps_last() {
        let sent = vec![
            message("m1", "B", "A", "a", Some("2026-02-01T10:00:00Z")),
            message("m2", "B", "C", "c", None),
            message("m3", "B", "D", "d", Some("2026-02-05T10:00:00Z")),
        ];

        let counterparts = build_counterparts(&sent, &[], "B");
        let ids: Vec<&str> = counterparts.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["D", "A", "C"]);
    }

    #[test]
    fn ties_keep_relative_order() {
        let sent = vec![
            message("m1", "B", "A", "a", None),
            message("m2", "B", "C", "c", None),
        ];

        let counterparts = build_counterparts(&sent, &[], "B");
        let ids: Vec<&str> = counterparts.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn unread_tracks_incoming_unread_messages() {
        let mut incoming = message("m1", "A", "B", "hi", None);
        incoming.read = false;

        let counterparts = build_counterparts(&[], &[incoming], "B");
        assert!(counterparts[0].unread);

        // Own unsent-read flag does not mark the conversation unread.
        let mut own = message("m2", "B", "C", "hi", None);
        own.read = false;
        let counterparts = build_counterparts(&[own], &[], "B");
        assert!(!counterparts[0].unread);
    }

    #[test]
    fn available_excludes_history() {
        let roster = vec![summary("A", "Ana"), summary("C", "Carla")];
        let with_history = build_counterparts(&[message("m1", "B", "A", "x", None)], &[], "B");

        let available = available_counterparts(&roster, &with_history);

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "C");
        assert_eq!(available[0].last_message, None);
    }

    #[test]
    fn query_filter_is_case_insensitive() {
        let list = vec![
            Counterpart::from_roster(&summary("A", "Ana Souza")),
            Counterpart::from_roster(&summary("C", "Carla Lima")),
        ];

        assert_eq!(filter_by_query(&list, "soUZa").len(), 1);
        assert_eq!(filter_by_query(&list, "  ").len(), 2);
        assert_eq!(filter_by_query(&list, "zzz").len(), 0);
    }

    #[test]
    fn first_send_moves_counterpart_to_head_exactly_once() {
        let mut with_chats = vec![Counterpart::from_roster(&summary("D", "Duda"))];
        let mut available = vec![
            Counterpart::from_roster(&summary("A", "Ana")),
            Counterpart::from_roster(&summary("C", "Carla")),
        ];
        let target = available[0].clone();

        record_send(&mut with_chats, &mut available, &target, "hello", None);
        record_send(&mut with_chats, &mut available, &target, "again", None);

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "C");
        assert_eq!(with_chats.len(), 2);
        assert_eq!(with_chats[0].id, "A");
        assert_eq!(with_chats[0].last_message.as_deref(), Some("again"));
    }
}
