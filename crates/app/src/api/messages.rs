//! Client helpers for the chat message endpoints. The backend scopes
//! results to the given user; this client only centralizes the paths.

use shared_types::{Message, SendMessageRequest};

use super::error::ApiError;
use super::http;

/// Messages sent by the user.
pub async fn sent_messages(user_id: &str) -> Result<Vec<Message>, ApiError> {
    http::get_json(&format!("/messages/sent/{user_id}")).await
}

/// Messages received by the user.
pub async fn received_messages(user_id: &str) -> Result<Vec<Message>, ApiError> {
    http::get_json(&format!("/messages/received/{user_id}")).await
}

/// Send a message; returns the created record.
pub async fn send_message(request: &SendMessageRequest) -> Result<Message, ApiError> {
    http::post_json("/messages", request).await
}
