//! localStorage-backed session persistence for the web platform.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). An unavailable or blocked localStorage
//! degrades to "no session", which the route guard turns into a redirect to
//! the login view rather than a crash.

use crate::session::{Session, SessionStore};

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "user_id";

/// SessionStore backed by `window.localStorage`, so the session survives
/// page reloads until an explicit logout clears it.
#[derive(Clone, Debug, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user_id = storage.get_item(USER_ID_KEY).ok()??;
        Some(Session { token, user_id })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USER_ID_KEY, &session.user_id);
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_ID_KEY);
    }
}
