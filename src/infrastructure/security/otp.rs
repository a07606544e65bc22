// src/infrastructure/security/otp.rs
use crate::application::ApplicationResult;
use crate::application::ports::otp::{OtpChallenge, OtpChallengeStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Pending login challenges, keyed by normalized email. `take` removes
/// on read, which is what makes codes single-use.
#[derive(Default)]
pub struct InMemoryOtpChallengeStore {
    pending: Mutex<HashMap<String, OtpChallenge>>,
}

impl InMemoryOtpChallengeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpChallengeStore for InMemoryOtpChallengeStore {
    async fn put(&self, challenge: OtpChallenge) -> ApplicationResult<()> {
        let mut guard = self.pending.lock().unwrap();
        guard.insert(challenge.email.clone(), challenge);
        Ok(())
    }

    async fn take(&self, email: &str) -> ApplicationResult<Option<OtpChallenge>> {
        let mut guard = self.pending.lock().unwrap();
        Ok(guard.remove(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn challenge(email: &str) -> OtpChallenge {
        OtpChallenge {
            email: email.into(),
            code_digest: vec![1, 2, 3],
            expires_at: Utc::now() + Duration::minutes(5),
            attempts_left: 5,
        }
    }

    #[tokio::test]
    async fn take_removes_the_challenge() {
        let store = InMemoryOtpChallengeStore::new();
        store.put(challenge("a@example.com")).await.unwrap();

        assert!(store.take("a@example.com").await.unwrap().is_some());
        assert!(store.take("a@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_replaces_pending_challenge() {
        let store = InMemoryOtpChallengeStore::new();
        store.put(challenge("a@example.com")).await.unwrap();

        let mut replacement = challenge("a@example.com");
        replacement.code_digest = vec![9, 9, 9];
        store.put(replacement).await.unwrap();

        let stored = store.take("a@example.com").await.unwrap().unwrap();
        assert_eq!(stored.code_digest, vec![9, 9, 9]);
    }
}
