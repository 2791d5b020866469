//! Client helpers for the course endpoints.

use shared_types::Course;

use super::error::ApiError;
use super::http;

/// Courses visible to the current student.
pub async fn list_courses() -> Result<Vec<Course>, ApiError> {
    http::get_json("/courses").await
}

/// A single course with its lessons.
pub async fn get_course(id: &str) -> Result<Course, ApiError> {
    http::get_json(&format!("/courses/{id}")).await
}
