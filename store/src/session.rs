use serde::{Deserialize, Serialize};

/// An authenticated session: the opaque backend token plus the id of the
/// user it belongs to. Created on login, destroyed on logout, read at the
/// route-guard boundary and by authenticated backend calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

/// Persistence for the current session.
///
/// A missing session is the logged-out state; there is no expiry or refresh
/// handling, so a stale token only surfaces later as a failed backend call.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}
