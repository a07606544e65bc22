// src/infrastructure/directory.rs
use crate::application::ApplicationResult;
use crate::application::ports::{directory::UserDirectory, util::IdGenerator};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Email → principal bindings for the passcode login. The first
/// verified login for an address mints its id; later logins reuse it.
pub struct InMemoryUserDirectory {
    ids: Arc<dyn IdGenerator>,
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserDirectory {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn resolve_or_register(&self, email: &str) -> ApplicationResult<User> {
        let mut guard = self.users.lock().unwrap();
        if let Some(user) = guard.get(email) {
            return Ok(user.clone());
        }

        let user = User {
            id: UserId::new(self.ids.generate())?,
            email: Some(email.to_string()),
        };
        guard.insert(email.to_string(), user.clone());
        Ok(user)
    }
}
