//! Client helpers for the mentoring-session endpoints. Sessions are
//! created elsewhere; this client lists, updates, and deletes them.

use shared_types::{MentoringSession, SessionUpdate};

use super::error::ApiError;
use super::http;

/// All sessions visible to the caller. The UI filters to the current
/// mentor's own sessions.
pub async fn list_sessions() -> Result<Vec<MentoringSession>, ApiError> {
    http::get_json("/sessions").await
}

/// Full-replace update of a session; returns the server's representation.
pub async fn update_session(
    id: &str,
    update: &SessionUpdate,
) -> Result<MentoringSession, ApiError> {
    http::put_json(&format!("/sessions/{id}"), update).await
}

/// Delete a session. Both the end-session and refuse-session flows land
/// here.
pub async fn delete_session(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/sessions/{id}")).await
}
