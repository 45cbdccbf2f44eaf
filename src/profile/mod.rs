//! Patient Profile Flow
//!
//! Orchestrates the profile read and update paths between the hosted auth
//! service and the profile store. The hosted service sits behind the
//! [`PortalBackend`] trait so the flow can be exercised without a browser.

mod flow;

pub use flow::{
    default_record, load_profile, save_profile, LoadOutcome, LoadedProfile, ProfileForm, SaveError,
};

use async_trait::async_trait;

use crate::api::{self, ApiError, Identity, MetadataUpdate, ProfileRecord};

/// Boundary to the hosted authentication and database service.
#[async_trait(?Send)]
pub trait PortalBackend {
    /// Current authenticated identity, if a session exists.
    async fn current_user(&self) -> Result<Option<Identity>, ApiError>;

    /// Update metadata on the auth-side identity.
    async fn update_user_metadata(&self, fields: &MetadataUpdate) -> Result<(), ApiError>;

    /// Fetch the profile record keyed by identity id.
    async fn profile_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, ApiError>;

    /// Insert-or-update a profile record, idempotent per id.
    async fn upsert_profile(&self, record: &ProfileRecord) -> Result<(), ApiError>;
}

/// Production backend talking to the hosted service over REST.
#[derive(Clone, Copy, Default)]
pub struct HostedBackend;

#[async_trait(?Send)]
impl PortalBackend for HostedBackend {
    async fn current_user(&self) -> Result<Option<Identity>, ApiError> {
        api::auth::current_user().await
    }

    async fn update_user_metadata(&self, fields: &MetadataUpdate) -> Result<(), ApiError> {
        api::auth::update_user_metadata(fields).await
    }

    async fn profile_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, ApiError> {
        api::profiles::profile_by_id(id).await
    }

    async fn upsert_profile(&self, record: &ProfileRecord) -> Result<(), ApiError> {
        api::profiles::upsert_profile(record).await
    }
}
