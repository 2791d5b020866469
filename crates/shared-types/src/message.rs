use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// A chat message as returned by the messages API.
///
/// `sent_at` is an ISO-8601 string when the backend supplies one; older
/// records omit it, so ordering code must not rely on its presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: Participant,
    pub recipient: Participant,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// Request body for sending a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_deserializes_from_api_json() {
        let json = r#"{
            "id": "m-1",
            "sender": {"id": "u-1", "name": "Ana"},
            "recipient": {"id": "u-2", "name": "Rui", "avatarUrl": "https://img/rui.png"},
            "content": "hello",
            "sentAt": "2026-02-10T14:30:00Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        assert_eq!(msg.sender.id, "u-1");
        assert_eq!(msg.recipient.avatar_url.as_deref(), Some("https://img/rui.png"));
        assert_eq!(msg.sent_at.as_deref(), Some("2026-02-10T14:30:00Z"));
        assert!(!msg.read);
    }

    #[test]
    fn message_tolerates_missing_timestamp() {
        let json = r#"{
            "id": "m-2",
            "sender": {"id": "u-1", "name": "Ana"},
            "recipient": {"id": "u-2", "name": "Rui"},
            "content": "no clock"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sent_at, None);
    }

    #[test]
    fn send_request_serializes_camel_case() {
        let req = SendMessageRequest {
            sender_id: "u-1".into(),
            recipient_id: "u-2".into(),
            content: "oi".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"senderId\""));
        assert!(json.contains("\"recipientId\""));
    }
}
