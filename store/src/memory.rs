use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        let session = Session {
            token: "abc123".to_string(),
            user_id: "7".to_string(),
        };
        store.save(&session);
        assert_eq!(store.load(), Some(session.clone()));

        // Saving again overwrites rather than accumulating.
        let replacement = Session {
            token: "def456".to_string(),
            user_id: "8".to_string(),
        };
        store.save(&replacement);
        assert_eq!(store.load(), Some(replacement));

        store.clear();
        assert!(store.load().is_none());
    }
}
