//! Message-thread rendering model and the optimistic-send bookkeeping
//! used by the chat panel.

use chrono::NaiveDateTime;
use shared_types::Message;

/// A message as rendered in the chat panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMessage {
    pub id: String,
    pub author: String,
    pub avatar_url: Option<String>,
    pub content: String,
    pub own: bool,
    /// True while the message only exists locally, before the backend
    /// confirms it.
    pub pending: bool,
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Map a backend message for display. Own messages are labeled "You".
pub fn render_message(message: &Message, me: &str) -> ThreadMessage {
    let own = message.sender.id == me;
    ThreadMessage {
        id: message.id.clone(),
        author: if own {
            "You".to_string()
        } else {
            message.sender.name.clone()
        },
        avatar_url: message.sender.avatar_url.clone(),
        content: message.content.clone(),
        own,
        pending: false,
    }
}

/// Build the visible thread for one counterpart from the sent+received
/// union: keep messages involving the counterpart, label own messages,
/// and order by timestamp where one exists (stable otherwise).
pub fn build_thread(
    sent: &[Message],
    received: &[Message],
    me: &str,
    counterpart: &str,
) -> Vec<ThreadMessage> {
    let mut pairs: Vec<(Option<NaiveDateTime>, ThreadMessage)> = sent
        .iter()
        .chain(received.iter())
        .filter(|m| m.sender.id == counterpart || m.recipient.id == counterpart)
        .map(|m| {
            (
                m.sent_at.as_deref().and_then(parse_timestamp),
                render_message(m, me),
            )
        })
        .collect();

    pairs.sort_by(|(ta, _), (tb, _)| match (ta, tb) {
        (Some(ta), Some(tb)) => ta.cmp(tb),
        _ => std::cmp::Ordering::Equal,
    });

    pairs.into_iter().map(|(_, message)| message).collect()
}

/// Locally rendered message for an in-flight send.
pub fn optimistic(temp_id: &str, content: &str) -> ThreadMessage {
    ThreadMessage {
        id: temp_id.to_string(),
        author: "You".to_string(),
        avatar_url: None,
        content: content.to_string(),
        own: true,
        pending: true,
    }
}

/// Remove a failed optimistic entry. The list length returns to its
/// pre-send value.
pub fn rollback(messages: &mut Vec<ThreadMessage>, temp_id: &str) {
    messages.retain(|m| m.id != temp_id);
}

/// Replace a confirmed optimistic entry with the server's record, keyed
/// by the synthesized id. If a refetch already removed the entry, the
/// confirmed message is appended instead.
pub fn confirm(messages: &mut Vec<ThreadMessage>, temp_id: &str, created: &Message, me: &str) {
    let rendered = render_message(created, me);
    match messages.iter().position(|m| m.id == temp_id) {
        Some(position) => messages[position] = rendered,
        None => {
            if !messages.iter().any(|m| m.id == rendered.id) {
                messages.push(rendered);
            }
        }
    }
}

/// Merge a wholesale refetch with the current panel state: the server
/// list wins, and pending optimistic entries survive until a refetch
/// actually contains them.
pub fn merge_refetch(server: Vec<ThreadMessage>, current: &[ThreadMessage]) -> Vec<ThreadMessage> {
    let mut merged = server;
    for message in current.iter().filter(|m| m.pending) {
        if !merged.iter().any(|existing| existing.id == message.id) {
            merged.push(message.clone());
        }
    }
    merged
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

    #[test]
    fn thread_keeps_only_the_selected_counterpart() {
        let sent = vec![
            message("m1", "B", "A", "to a", None),
            message("m2", "B", "C", "to c", None),
        ];
        let received = vec![message("m3", "A", "B", "from a", None)];

        let thread = build_thread(&sent, &received, "B", "A");
        let ids: Vec<&str> = thread.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids, vec!["m1", "m3"]);
    }

    #[test]
    fn own_messages_are_labeled_you() {
        let sent = vec![message("m1", "B", "A", "hi", None)];
        let received = vec![message("m2", "A", "B", "hello", None)];

        let thread = build_thread(&sent, &received, "B", "A");

        assert_eq!(thread[0].author, "You");
        assert!(thread[0].own);
        assert_eq!(thread[1].author, "A");
        assert!(!thread[1].own);
    }

    #[test]
    fn thread_orders_by_timestamp_when_present() {
        let sent = vec![message("m1", "B", "A", "late", Some("2026-02-02T10:00:00Z"))];
        let received = vec![message("m2", "A", "B", "early", Some("2026-02-01T10:00:00Z"))];

        let thread = build_thread(&sent, &received, "B", "A");
        let ids: Vec<&str> = thread.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[test]
    fn rollback_restores_pre_send_length() {
        let mut messages = vec![
            render_message(&message("m1", "B", "A", "hi", None), "B"),
        ];
        let before = messages.len();

        messages.push(optimistic("tmp-1", "draft"));
        rollback(&mut messages, "tmp-1");

        assert_eq!(messages.len(), before);
    }

    #[test]
    fn confirm_replaces_the_optimistic_entry_in_place() {
        let mut messages = vec![optimistic("tmp-1", "draft")];
        let created = message("m9", "B", "A", "draft", Some("2026-02-02T10:00:00Z"));

        confirm(&mut messages, "tmp-1", &created, "B");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "m9");
        assert!(!messages[0].pending);
        assert!(messages[0].own);
    }

    #[test]
    fn refetch_does_not_duplicate_a_confirmed_send() {
        let confirmed = render_message(&message("m9", "B", "A", "draft", None), "B");
        let current = vec![confirmed.clone()];
        // Server refetch already includes m9.
        let server = vec![
            render_message(&message("m1", "A", "B", "hi", None), "B"),
            confirmed.clone(),
        ];

        let merged = merge_refetch(server, &current);

        assert_eq!(merged.iter().filter(|m| m.id == "m9").count(), 1);
    }

    #[test]
    fn refetch_does_not_drop_a_pending_send() {
        let current = vec![optimistic("tmp-1", "draft")];
        let server = vec![render_message(&message("m1", "A", "B", "hi", None), "B")];

        let merged = merge_refetch(server, &current);

        assert_eq!(merged.len(), 2);
        assert!(merged.iter().any(|m| m.id == "tmp-1" && m.pending));
    }
}
