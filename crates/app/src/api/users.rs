//! Client helpers for the roster endpoints.

use shared_types::UserSummary;

use super::error::ApiError;
use super::http;

/// All students on the platform.
pub async fn list_students() -> Result<Vec<UserSummary>, ApiError> {
    http::get_json("/users/students").await
}

/// Mentors currently available for chat.
pub async fn list_chat_mentors() -> Result<Vec<UserSummary>, ApiError> {
    http::get_json("/users/mentors/available").await
}
