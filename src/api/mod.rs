//! Hosted Backend Client
//!
//! Functions for communicating with the hosted authentication and database
//! service over REST. The service owns all persistence and access control;
//! this module only shuttles JSON and the bearer session token around.

pub mod auth;
pub mod error;
pub mod profiles;

pub use auth::{Identity, MetadataUpdate};
pub use error::ApiError;
pub use profiles::ProfileRecord;

/// Default backend base URL
pub const DEFAULT_BACKEND_BASE: &str = "https://portal.brightwaydental.app";

const BACKEND_URL_KEY: &str = "portal_backend_url";
const SESSION_TOKEN_KEY: &str = "portal_session_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Get the backend base URL from local storage or use default
pub fn backend_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(BACKEND_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_BACKEND_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Current bearer session token, if the visitor has signed in.
pub fn session_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(SESSION_TOKEN_KEY).ok().flatten())
}

/// Store the bearer session token after the hosted login hands one back.
pub fn set_session_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SESSION_TOKEN_KEY, token);
    }
}

/// Drop the stored session token.
pub fn clear_session_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
    }
}

/// Capture a session token handed back in the URL fragment after the hosted
/// login redirects here (`#access_token=...`), store it and strip the
/// fragment.
pub fn capture_session_from_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(hash) = location.hash() else {
        return;
    };
    if let Some(token) = parse_access_token(&hash) {
        set_session_token(&token);
        let _ = location.set_hash("");
    }
}

/// Extract the access token from a `#access_token=...` fragment.
fn parse_access_token(hash: &str) -> Option<String> {
    let fragment = hash.strip_prefix('#')?;
    fragment.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "access_token" && !value.is_empty()).then(|| value.to_string())
    })
}

/// Hosted login page, with an optional post-login return target.
fn login_url_for(base: &str, return_to: Option<&str>) -> String {
    match return_to {
        Some(target) => format!(
            "{}/auth/v1/login?redirect_to={}",
            base,
            urlencoding::encode(target)
        ),
        None => format!("{}/auth/v1/login", base),
    }
}

/// Login entry point for the current page.
pub fn login_url() -> String {
    let return_to = web_sys::window().and_then(|window| window.location().href().ok());
    login_url_for(&backend_base(), return_to.as_deref())
}

/// Send the browser to the hosted login page.
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&login_url());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_without_return_target() {
        let url = login_url_for("https://portal.example.com", None);
        assert_eq!(url, "https://portal.example.com/auth/v1/login");
    }

    #[test]
    fn test_parse_access_token() {
        assert_eq!(
            parse_access_token("#access_token=abc123&token_type=bearer"),
            Some("abc123".to_string())
        );
        assert_eq!(
            parse_access_token("#token_type=bearer&access_token=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(parse_access_token("#access_token="), None);
        assert_eq!(parse_access_token("#foo=bar"), None);
        assert_eq!(parse_access_token(""), None);
    }

    #[test]
    fn test_login_url_encodes_return_target() {
        let url = login_url_for(
            "https://portal.example.com",
            Some("https://brightwaylakeview.com/profile?tab=1"),
        );
        assert_eq!(
            url,
            "https://portal.example.com/auth/v1/login?redirect_to=\
             https%3A%2F%2Fbrightwaylakeview.com%2Fprofile%3Ftab%3D1"
        );
    }
}
