// src/application/auth.rs
use crate::application::dto::AuthTokenDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{
    directory::UserDirectory,
    mailer::OtpMailer,
    otp::{OtpChallenge, OtpChallengeStore},
    security::{Session, SessionStore, TokenIssuer},
    time::Clock,
    util::IdGenerator,
};
use chrono::Duration as ChronoDuration;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;

// Codes are zero-padded six-digit decimals.
const OTP_CODE_SPACE: u32 = 1_000_000;

#[derive(Debug, Clone)]
pub struct AuthPolicy {
    pub otp_ttl: Duration,
    pub session_ttl: Duration,
    pub otp_attempts: u8,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            otp_ttl: Duration::from_secs(300),
            session_ttl: Duration::from_secs(60 * 60 * 24 * 7),
            otp_attempts: 5,
        }
    }
}

/// One-time-passcode email login. A challenge is issued per address,
/// verified at most once, and a successful verification opens a session
/// and issues a bearer token at the same time.
pub struct AuthService {
    challenges: Arc<dyn OtpChallengeStore>,
    directory: Arc<dyn UserDirectory>,
    sessions: Arc<dyn SessionStore>,
    tokens: Arc<dyn TokenIssuer>,
    mailer: Arc<dyn OtpMailer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    policy: AuthPolicy,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        challenges: Arc<dyn OtpChallengeStore>,
        directory: Arc<dyn UserDirectory>,
        sessions: Arc<dyn SessionStore>,
        tokens: Arc<dyn TokenIssuer>,
        mailer: Arc<dyn OtpMailer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        policy: AuthPolicy,
    ) -> Self {
        Self {
            challenges,
            directory,
            sessions,
            tokens,
            mailer,
            clock,
            ids,
            policy,
        }
    }

    /// Issue a fresh login code for the address and hand it to the
    /// mailer. Re-requesting replaces any pending challenge.
    pub async fn request_code(&self, email: &str) -> ApplicationResult<()> {
        let email = normalize_email(email)?;
        let code = format!("{:06}", rand::rng().random_range(0..OTP_CODE_SPACE));

        let challenge = OtpChallenge {
            email: email.clone(),
            code_digest: code_digest(&email, &code),
            expires_at: self.clock.now() + to_chrono(self.policy.otp_ttl),
            attempts_left: self.policy.otp_attempts,
        };
        self.challenges.put(challenge).await?;
        self.mailer.deliver(&email, &code).await?;

        tracing::debug!(email = %email, "login code issued");
        Ok(())
    }

    /// Verify a code. Every failure mode (unknown address, expired or
    /// replayed challenge, exhausted attempts, wrong code) produces the
    /// same Unauthorized error so callers learn nothing extra.
    pub async fn verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> ApplicationResult<(AuthTokenDto, Session)> {
        let email = normalize_email(email)?;

        let Some(challenge) = self.challenges.take(&email).await? else {
            return Err(invalid_code());
        };

        let now = self.clock.now();
        if challenge.expires_at <= now {
            return Err(invalid_code());
        }

        if challenge.code_digest != code_digest(&email, code.trim()) {
            if challenge.attempts_left > 1 {
                self.challenges.put(challenge.spend_attempt()).await?;
            }
            return Err(invalid_code());
        }

        let user = self.directory.resolve_or_register(&email).await?;

        let issued = self.tokens.issue(&user).await?;
        let session = Session {
            id: self.ids.generate(),
            user: user.clone(),
            expires_at: now + to_chrono(self.policy.session_ttl),
        };
        self.sessions.insert(session.clone()).await?;

        tracing::info!(user_id = %user.id, "login verified");

        let token = AuthTokenDto {
            token: issued.token,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
            expires_in: (issued.expires_at - issued.issued_at).num_seconds(),
        };
        Ok((token, session))
    }

    /// Idempotent: removing an unknown session is a no-op.
    pub async fn logout(&self, session_id: &str) -> ApplicationResult<()> {
        self.sessions.remove(session_id).await
    }
}

fn invalid_code() -> ApplicationError {
    ApplicationError::unauthorized("invalid or expired login code")
}

fn normalize_email(raw: &str) -> ApplicationResult<String> {
    let email = raw.trim().to_ascii_lowercase();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !well_formed {
        return Err(ApplicationError::validation("malformed email address"));
    }
    Ok(email)
}

fn code_digest(email: &str, code: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(code.as_bytes());
    hasher.finalize().to_vec()
}

fn to_chrono(ttl: Duration) -> ChronoDuration {
    ChronoDuration::from_std(ttl).unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
}
