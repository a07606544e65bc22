// src/infrastructure/security/session_store.rs
use crate::application::ApplicationResult;
use crate::application::ports::security::{Session, SessionStore};
use crate::application::ports::time::Clock;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-lifetime session store. Expired entries are dropped lazily
/// on lookup.
pub struct InMemorySessionStore {
    clock: Arc<dyn Clock>,
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> ApplicationResult<()> {
        let mut guard = self.sessions.lock().unwrap();
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> ApplicationResult<Option<Session>> {
        let mut guard = self.sessions.lock().unwrap();
        match guard.get(session_id) {
            Some(session) if session.expires_at <= self.clock.now() => {
                guard.remove(session_id);
                Ok(None)
            }
            Some(session) => Ok(Some(session.clone())),
            None => Ok(None),
        }
    }

    async fn remove(&self, session_id: &str) -> ApplicationResult<()> {
        let mut guard = self.sessions.lock().unwrap();
        guard.remove(session_id);
        Ok(())
    }
}
