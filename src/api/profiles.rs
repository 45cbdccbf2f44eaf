//! Profile Store Client
//!
//! Reads and upserts patient profile rows in the hosted database service.

use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::{backend_base, session_token};

/// Persisted patient profile, keyed by the auth identity id.
///
/// At most one row exists per identity; the backend enforces ownership.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileRecord {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Row filter endpoint for a single profile id.
fn profile_query_url(base: &str, id: &str) -> String {
    format!(
        "{}/rest/v1/profiles?id=eq.{}&select=*",
        base,
        urlencoding::encode(id)
    )
}

/// Fetch the profile row for an identity id, or `None` when the user has
/// never saved one.
pub async fn profile_by_id(id: &str) -> ApiResult<Option<ProfileRecord>> {
    let token = session_token().ok_or(ApiError::Unauthenticated)?;

    let response = Request::get(&profile_query_url(&backend_base(), id))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(&response).await);
    }

    let mut rows: Vec<ProfileRecord> = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    if rows.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rows.remove(0)))
    }
}

/// Insert-or-update a profile row, idempotent per id.
pub async fn upsert_profile(record: &ProfileRecord) -> ApiResult<()> {
    let token = session_token().ok_or(ApiError::Unauthenticated)?;

    let response = Request::post(&format!("{}/rest/v1/profiles", backend_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Prefer", "resolution=merge-duplicates")
        .json(record)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(&response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_query_url() {
        let url = profile_query_url("https://portal.example.com", "user-123");
        assert_eq!(
            url,
            "https://portal.example.com/rest/v1/profiles?id=eq.user-123&select=*"
        );
    }

    #[test]
    fn test_profile_query_url_encodes_id() {
        let url = profile_query_url("https://portal.example.com", "a b&c");
        assert_eq!(
            url,
            "https://portal.example.com/rest/v1/profiles?id=eq.a%20b%26c&select=*"
        );
    }
}
