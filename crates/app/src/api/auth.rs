//! Client helpers for the authentication endpoints.

use shared_types::{LoginRequest, LoginResponse, RegisterRequest};

use super::error::ApiError;
use super::http;

/// Exchange credentials for a session token.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    http::post_json("/auth/login", request).await
}

/// Create a new account. The user signs in afterwards.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    http::post_json_empty("/auth/register", request).await
}
