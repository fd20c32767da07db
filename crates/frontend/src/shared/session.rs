//! Operator session storage.
//!
//! Token issuance belongs to the surrounding platform; this module only
//! reads and carries what the platform left in localStorage.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "backoffice_access_token";
const OPERATOR_KEY: &str = "backoffice_operator";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Display name of the signed-in operator, if the platform stored one.
pub fn get_operator() -> Option<String> {
    get_local_storage()?.get_item(OPERATOR_KEY).ok()?
}

/// Clear the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(OPERATOR_KEY);
    }
}

/// Bearer header value for authenticated requests.
pub fn auth_header() -> Option<String> {
    get_access_token().map(|token| format!("Bearer {}", token))
}
