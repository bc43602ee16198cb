//! In-memory registry of live edit sessions, keyed by a random id handed
//! out at creation. Nothing is persisted; dropping the process drops the
//! sessions.
use std::collections::HashMap;
use uuid::Uuid;

use crate::session::controller::EditSession;

pub struct SessionRegistry {
    sessions: HashMap<Uuid, EditSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            sessions: HashMap::new(),
        }
    }

    /// Create a fresh session and return its id.
    pub fn create(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, EditSession::new());
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&EditSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut EditSession> {
        self.sessions.get_mut(id)
    }

    /// Remove a session, reporting whether it existed.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        SessionRegistry::new()
    }
}
