//! HTTP API Client
//!
//! Functions for communicating with the OpSpend REST API. One module per
//! resource family; every request carries the auth token header and every
//! function returns `Result<T, String>` with a human-readable message.

use gloo_net::http::{RequestBuilder, Response};

pub mod admin;
pub mod dashboard;
pub mod directory;
pub mod payments;
pub mod savings;
pub mod services;
pub mod tickets;

pub use admin::*;
pub use dashboard::*;
pub use directory::*;
pub use payments::*;
pub use savings::*;
pub use services::*;
pub use tickets::*;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090/api/v1";

const API_URL_KEY: &str = "opspend_api_url";
const AUTH_TOKEN_KEY: &str = "opspend_auth_token";

fn storage_item(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn set_storage_item(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = storage_item(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    set_storage_item(API_URL_KEY, url);
}

/// Get the auth token from local storage
pub fn get_auth_token() -> Option<String> {
    storage_item(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Set the auth token in local storage
pub fn set_auth_token(token: &str) {
    set_storage_item(AUTH_TOKEN_KEY, token);
}

/// Attach the auth token header to a request
pub(crate) fn authorize(request: RequestBuilder) -> RequestBuilder {
    match get_auth_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Error body shape returned by the API
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Decode an error response body into a display message
pub(crate) async fn error_message(response: Response) -> String {
    response
        .json::<ApiError>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| "Unknown error".to_string())
}

/// Build a `?start=..&end=..` window query suffix
pub(crate) fn window_query(window: Option<(i64, i64)>) -> String {
    match window {
        Some((start, end)) => format!("?start={}&end={}", start, end),
        None => String::new(),
    }
}

// ============ Health ============

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();
    let health_url = api_base.replace("/api/v1", "/health");

    let response = authorize(gloo_net::http::Request::get(&health_url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_query_with_bounds() {
        assert_eq!(
            window_query(Some((100, 200))),
            "?start=100&end=200".to_string()
        );
    }

    #[test]
    fn test_window_query_without_bounds() {
        assert_eq!(window_query(None), String::new());
    }
}
