//! Session State
//!
//! Holds the authenticated identity once a portal page has resolved it, so
//! chrome components can react without refetching.

use leptos::*;

use crate::api::Identity;

/// Session context provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub identity: RwSignal<Option<Identity>>,
}

/// Provide the session context to the component tree.
pub fn provide_session() {
    provide_context(SessionState {
        identity: create_rw_signal(None),
    });
}

/// Fetch the session context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not provided")
}
