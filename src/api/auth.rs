//! Auth Service Client
//!
//! Session lookup and user-metadata updates against the hosted
//! authentication service.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::{backend_base, session_token};

/// Authenticated principal supplied by the auth service.
///
/// The email belongs to the sign-in identity and is not editable through
/// this application.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Metadata fields the settings form may change on the auth side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetadataUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

// ============ Wire Types ============

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: String,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Serialize)]
struct MetadataRequest<'a> {
    data: &'a MetadataUpdate,
}

// ============ API Functions ============

/// Fetch the current authenticated identity, or `None` when there is no
/// session or the token has expired.
pub async fn current_user() -> ApiResult<Option<Identity>> {
    let token = match session_token() {
        Some(token) => token,
        None => return Ok(None),
    };

    let response = Request::get(&format!("{}/auth/v1/user", backend_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ApiError::from_response(&response).await);
    }

    let user: UserResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(Some(Identity {
        id: user.id,
        email: user.email,
        display_name: user.user_metadata.display_name,
    }))
}

/// Update metadata on the current identity.
pub async fn update_user_metadata(fields: &MetadataUpdate) -> ApiResult<()> {
    let token = session_token().ok_or(ApiError::Unauthenticated)?;

    let response = Request::put(&format!("{}/auth/v1/user", backend_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&MetadataRequest { data: fields })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(&response).await);
    }

    Ok(())
}
