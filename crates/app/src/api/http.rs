//! JSON request helpers with a shared timeout policy. Feature clients go
//! through these so every call carries the bearer token and the same
//! error mapping.

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use web_sys::AbortController;

use super::error::ApiError;
use crate::config::AppConfig;
use crate::storage;

/// Request timeout (milliseconds) applied to all helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// GET a JSON payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_auth(Request::get(&url))
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_auth(Request::post(&url))
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// POST a JSON body and expect an empty response.
pub async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_auth(Request::post(&url))
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// PUT a JSON body and parse a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_auth(Request::put(&url))
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// DELETE a resource and expect an empty response.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_auth(Request::delete(&url))
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Attach the bearer token when a session is present.
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match storage::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    join_url(&config.api_base_url, path)
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `ApiError` with timeout detection.
fn map_request_error(err: gloo_net::Error) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout so the UI never hangs on a call.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, ApiError>,
) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Trims and truncates HTTP error bodies for user-facing messages.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{join_url, sanitize_body};
    use pretty_assertions::assert_eq;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(join_url("/api", "/sessions"), "/api/sessions");
        assert_eq!(join_url("/api/", "sessions"), "/api/sessions");
        assert_eq!(
            join_url("https://api.example.com", "/messages"),
            "https://api.example.com/messages"
        );
    }

    #[test]
    fn join_url_with_empty_base_keeps_path() {
        assert_eq!(join_url("", "/sessions"), "/sessions");
        assert_eq!(join_url("  ", "/sessions"), "/sessions");
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("  ".to_string()), "Request failed.");
        assert_eq!(sanitize_body(" boom \n".to_string()), "boom");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
