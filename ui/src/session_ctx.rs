//! Session context and hooks for the UI.
//!
//! The session is an explicit object with a defined lifecycle: loaded from
//! persistent storage when the provider mounts, created by the login view,
//! destroyed by logout. Components read it through [`use_session`]; nothing
//! reaches into browser storage directly.

use dioxus::prelude::*;
use store::{Session, SessionStore};

/// Session state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Backend client bound to the current session token.
    pub fn client(&self) -> api::Client {
        match self.token() {
            Some(token) => api::Client::with_token(token),
            None => api::Client::new(),
        }
    }
}

fn session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalSessionStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemorySessionStore::new()
    }
}

/// Get the current session state. Returns a signal that updates when the
/// user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that loads the persisted session and exposes it to
/// the tree. Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState {
        session: session_store().load(),
    });
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a freshly authenticated session and publish it to the tree.
pub fn store_session(mut state: Signal<SessionState>, session: Session) {
    session_store().save(&session);
    state.set(SessionState {
        session: Some(session),
    });
}

/// Drop the current session from storage and from the tree.
pub fn clear_session(mut state: Signal<SessionState>) {
    session_store().clear();
    state.set(SessionState::default());
}
