//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and for normalizing every
//! backend failure into a single human-readable message.

/// Fallback when the backend supplied no usable `message` field.
pub const GENERIC_ERROR: &str = "The operation failed. Please try again.";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Normalize a non-2xx response into one message string: prefer the
/// server-provided `message` field, fall back to the generic default.
/// Every error is locally recoverable by re-triggering the action, so no
/// retryable/fatal distinction is made here.
pub async fn error_from_response(response: gloo_net::http::Response) -> String {
    let status = response.status();
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.trim().is_empty() {
                return message.to_string();
            }
        }
    }
    log::error!("backend request failed with HTTP {}", status);
    GENERIC_ERROR.to_string()
}

/// Normalize a transport-level failure (network drop, malformed payload).
pub fn network_error(err: gloo_net::Error) -> String {
    log::error!("request failed: {}", err);
    GENERIC_ERROR.to_string()
}
