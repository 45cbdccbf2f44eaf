//! Profile Load and Save Orchestration
//!
//! The load path resolves the visitor's identity and profile row; the save
//! path pushes the settings form back out. Both paths are sequential awaits
//! with no retries. The auth service and the profile store are separate
//! systems, so the save path restores the previous auth metadata when the
//! store write fails after the metadata write succeeded.

use chrono::Utc;
use thiserror::Error;

use super::PortalBackend;
use crate::api::{ApiError, Identity, MetadataUpdate, ProfileRecord};
use crate::console;

/// Result of resolving the profile for the current visitor.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// No usable session; the caller should redirect to the login entry
    /// point before rendering any profile data.
    Unauthenticated,
    Ready {
        identity: Identity,
        profile: LoadedProfile,
    },
}

/// Distinguishes a stored profile row from defaults synthesized off the
/// identity, so callers can tell "never saved" from "saved empty".
#[derive(Clone, Debug, PartialEq)]
pub enum LoadedProfile {
    /// The store holds a row for this identity.
    Found(ProfileRecord),
    /// No row exists (or the read failed); fields derived from the identity.
    Defaulted(ProfileRecord),
}

impl LoadedProfile {
    pub fn record(&self) -> &ProfileRecord {
        match self {
            Self::Found(record) | Self::Defaulted(record) => record,
        }
    }

    pub fn into_record(self) -> ProfileRecord {
        match self {
            Self::Found(record) | Self::Defaulted(record) => record,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

/// Editable fields on the settings form. Email is absent: it belongs to the
/// sign-in identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub display_name: String,
    pub phone: String,
    pub avatar_url: String,
}

impl ProfileForm {
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            display_name: record.display_name.clone(),
            phone: record.phone.clone(),
            avatar_url: record.avatar_url.clone(),
        }
    }
}

/// Save failure taxonomy. The metadata update and the store upsert run in
/// order; a `Metadata` failure means the upsert was never attempted.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("metadata update failed: {0}")]
    Metadata(#[source] ApiError),

    /// The store upsert failed after the metadata update had succeeded.
    /// `rolled_back` reports whether the compensating metadata restore went
    /// through; when false the two services are left divergent.
    #[error("profile upsert failed (metadata rolled back: {rolled_back}): {source}")]
    Upsert {
        #[source]
        source: ApiError,
        rolled_back: bool,
    },
}

/// Default profile for an identity with no stored row: name and email come
/// from the identity, everything else stays empty.
pub fn default_record(identity: &Identity) -> ProfileRecord {
    ProfileRecord {
        id: identity.id.clone(),
        email: identity.email.clone(),
        display_name: identity.display_name.clone().unwrap_or_default(),
        phone: String::new(),
        avatar_url: String::new(),
        updated_at: None,
    }
}

/// Resolve the visitor's identity and profile.
///
/// A store read failure degrades to identity-derived defaults and is only
/// reported on the console channel.
pub async fn load_profile<B: PortalBackend + ?Sized>(backend: &B) -> LoadOutcome {
    let identity = match backend.current_user().await {
        Ok(Some(identity)) => identity,
        Ok(None) => return LoadOutcome::Unauthenticated,
        Err(err) => {
            console::error(&format!("auth lookup failed: {}", err));
            return LoadOutcome::Unauthenticated;
        }
    };

    let profile = match backend.profile_by_id(&identity.id).await {
        Ok(Some(record)) => LoadedProfile::Found(record),
        Ok(None) => LoadedProfile::Defaulted(default_record(&identity)),
        Err(err) => {
            console::error(&format!("profile fetch failed: {}", err));
            LoadedProfile::Defaulted(default_record(&identity))
        }
    };

    LoadOutcome::Ready { identity, profile }
}

/// Persist the settings form.
///
/// Order matters: auth metadata first, then the store upsert. When the
/// upsert fails the previous display name is written back to the auth
/// service so the two systems do not silently diverge.
pub async fn save_profile<B: PortalBackend + ?Sized>(
    backend: &B,
    identity: &Identity,
    form: &ProfileForm,
) -> Result<ProfileRecord, SaveError> {
    let update = MetadataUpdate {
        display_name: Some(form.display_name.clone()),
    };
    backend
        .update_user_metadata(&update)
        .await
        .map_err(SaveError::Metadata)?;

    let record = ProfileRecord {
        id: identity.id.clone(),
        email: identity.email.clone(),
        display_name: form.display_name.clone(),
        phone: form.phone.clone(),
        avatar_url: form.avatar_url.clone(),
        updated_at: Some(Utc::now()),
    };

    if let Err(err) = backend.upsert_profile(&record).await {
        let restore = MetadataUpdate {
            display_name: Some(identity.display_name.clone().unwrap_or_default()),
        };
        let rolled_back = match backend.update_user_metadata(&restore).await {
            Ok(()) => true,
            Err(rollback_err) => {
                console::error(&format!("metadata rollback failed: {}", rollback_err));
                false
            }
        };
        return Err(SaveError::Upsert {
            source: err,
            rolled_back,
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        CurrentUser,
        UpdateMetadata(Option<String>),
        ProfileById(String),
        Upsert(ProfileRecord),
    }

    #[derive(Default)]
    struct FakeBackend {
        identity: Option<Identity>,
        stored: Option<ProfileRecord>,
        fail_auth: bool,
        fail_fetch: bool,
        fail_metadata: bool,
        fail_upsert: bool,
        fail_rollback: bool,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeBackend {
        fn signed_in() -> Self {
            Self {
                identity: Some(Identity {
                    id: "user-123".to_string(),
                    email: "pat@example.com".to_string(),
                    display_name: Some("Pat Doe".to_string()),
                }),
                ..Self::default()
            }
        }

        fn backend_error() -> ApiError {
            ApiError::Backend {
                status: 500,
                message: "boom".to_string(),
            }
        }

        fn metadata_calls(&self) -> Vec<Option<String>> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::UpdateMetadata(name) => Some(name.clone()),
                    _ => None,
                })
                .collect()
        }

        fn upsert_calls(&self) -> Vec<ProfileRecord> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Upsert(record) => Some(record.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl PortalBackend for FakeBackend {
        async fn current_user(&self) -> Result<Option<Identity>, ApiError> {
            self.calls.borrow_mut().push(Call::CurrentUser);
            if self.fail_auth {
                return Err(Self::backend_error());
            }
            Ok(self.identity.clone())
        }

        async fn update_user_metadata(&self, fields: &MetadataUpdate) -> Result<(), ApiError> {
            let prior = self
                .calls
                .borrow()
                .iter()
                .filter(|call| matches!(call, Call::UpdateMetadata(_)))
                .count();
            self.calls
                .borrow_mut()
                .push(Call::UpdateMetadata(fields.display_name.clone()));
            if self.fail_metadata || (self.fail_rollback && prior > 0) {
                return Err(Self::backend_error());
            }
            Ok(())
        }

        async fn profile_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::ProfileById(id.to_string()));
            if self.fail_fetch {
                return Err(Self::backend_error());
            }
            Ok(self.stored.clone())
        }

        async fn upsert_profile(&self, record: &ProfileRecord) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Upsert(record.clone()));
            if self.fail_upsert {
                return Err(Self::backend_error());
            }
            Ok(())
        }
    }

    fn jane_form() -> ProfileForm {
        ProfileForm {
            display_name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            avatar_url: String::new(),
        }
    }

    #[test]
    fn test_load_defaults_when_no_record() {
        let backend = FakeBackend::signed_in();

        let outcome = block_on(load_profile(&backend));

        match outcome {
            LoadOutcome::Ready { identity, profile } => {
                assert!(profile.is_defaulted());
                let record = profile.record();
                assert_eq!(record.id, identity.id);
                assert_eq!(record.email, "pat@example.com");
                assert_eq!(record.display_name, "Pat Doe");
                assert_eq!(record.phone, "");
                assert_eq!(record.avatar_url, "");
                assert_eq!(record.updated_at, None);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_load_returns_stored_record_verbatim() {
        let stored = ProfileRecord {
            id: "user-123".to_string(),
            email: "pat@example.com".to_string(),
            display_name: "Patricia".to_string(),
            phone: "555-0199".to_string(),
            avatar_url: "https://cdn.example.com/pat.jpg".to_string(),
            updated_at: Some(Utc::now()),
        };
        let backend = FakeBackend {
            stored: Some(stored.clone()),
            ..FakeBackend::signed_in()
        };

        let outcome = block_on(load_profile(&backend));

        match outcome {
            LoadOutcome::Ready { profile, .. } => {
                assert!(!profile.is_defaulted());
                assert_eq!(profile.into_record(), stored);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_load_without_session_is_unauthenticated() {
        let backend = FakeBackend::default();

        let outcome = block_on(load_profile(&backend));

        assert_eq!(outcome, LoadOutcome::Unauthenticated);
        // No profile fetch happens before the login redirect.
        assert_eq!(*backend.calls.borrow(), vec![Call::CurrentUser]);
    }

    #[test]
    fn test_load_auth_failure_is_unauthenticated() {
        let backend = FakeBackend {
            fail_auth: true,
            ..FakeBackend::signed_in()
        };

        let outcome = block_on(load_profile(&backend));

        assert_eq!(outcome, LoadOutcome::Unauthenticated);
    }

    #[test]
    fn test_load_fetch_failure_degrades_to_defaults() {
        let backend = FakeBackend {
            fail_fetch: true,
            ..FakeBackend::signed_in()
        };

        let outcome = block_on(load_profile(&backend));

        match outcome {
            LoadOutcome::Ready { profile, .. } => {
                assert!(profile.is_defaulted());
                assert_eq!(profile.record().display_name, "Pat Doe");
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_save_issues_one_metadata_update_and_one_upsert() {
        let backend = FakeBackend::signed_in();
        let identity = backend.identity.clone().unwrap();

        let record = block_on(save_profile(&backend, &identity, &jane_form())).unwrap();

        assert_eq!(
            backend.metadata_calls(),
            vec![Some("Jane Doe".to_string())]
        );

        let upserts = backend.upsert_calls();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].id, "user-123");
        assert_eq!(upserts[0].display_name, "Jane Doe");
        assert_eq!(upserts[0].phone, "555-0100");
        assert_eq!(upserts[0].avatar_url, "");
        assert!(upserts[0].updated_at.is_some());
        assert_eq!(upserts[0], record);
    }

    #[test]
    fn test_save_metadata_failure_skips_upsert() {
        let backend = FakeBackend {
            fail_metadata: true,
            ..FakeBackend::signed_in()
        };
        let identity = backend.identity.clone().unwrap();

        let result = block_on(save_profile(&backend, &identity, &jane_form()));

        assert!(matches!(result, Err(SaveError::Metadata(_))));
        assert!(backend.upsert_calls().is_empty());
    }

    #[test]
    fn test_save_upsert_failure_rolls_back_metadata() {
        let backend = FakeBackend {
            fail_upsert: true,
            ..FakeBackend::signed_in()
        };
        let identity = backend.identity.clone().unwrap();

        let result = block_on(save_profile(&backend, &identity, &jane_form()));

        match result {
            Err(SaveError::Upsert { rolled_back, .. }) => assert!(rolled_back),
            other => panic!("expected Upsert error, got {:?}", other),
        }
        // New name written first, previous name restored after the failure.
        assert_eq!(
            backend.metadata_calls(),
            vec![
                Some("Jane Doe".to_string()),
                Some("Pat Doe".to_string()),
            ]
        );
    }

    #[test]
    fn test_save_reports_failed_rollback() {
        let backend = FakeBackend {
            fail_upsert: true,
            fail_rollback: true,
            ..FakeBackend::signed_in()
        };
        let identity = backend.identity.clone().unwrap();

        let result = block_on(save_profile(&backend, &identity, &jane_form()));

        match result {
            Err(SaveError::Upsert { rolled_back, .. }) => assert!(!rolled_back),
            other => panic!("expected Upsert error, got {:?}", other),
        }
    }

    #[test]
    fn test_form_seeds_from_record() {
        let record = ProfileRecord {
            display_name: "Pat".to_string(),
            phone: "555-0101".to_string(),
            avatar_url: "https://cdn.example.com/a.png".to_string(),
            ..ProfileRecord::default()
        };

        let form = ProfileForm::from_record(&record);

        assert_eq!(form.display_name, "Pat");
        assert_eq!(form.phone, "555-0101");
        assert_eq!(form.avatar_url, "https://cdn.example.com/a.png");
    }
}
