// src/infrastructure/security/token.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::auth::{AuthFailure, AuthResult};
use crate::application::ports::security::{IssuedToken, TokenIssuer, TokenVerifier};
use crate::application::ports::time::Clock;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration as ChronoDuration;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

const MIN_SECRET_LEN: usize = 32;

/// Issues and verifies HMAC-SHA256 signed access tokens:
/// `base64url(claims-json) "." base64url(signature)`. Stateless on the
/// verification side, so the bearer path needs no store round-trip.
pub struct HmacTokenManager {
    key: Vec<u8>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    iat: i64,
    exp: i64,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            key: secret.as_bytes().to_vec(),
            ttl,
            clock,
        })
    }

    fn mac(&self) -> Result<HmacSha256, AuthFailure> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|err| AuthFailure::new(err.to_string(), 500))
    }
}

#[async_trait]
impl TokenIssuer for HmacTokenManager {
    async fn issue(&self, user: &User) -> ApplicationResult<IssuedToken> {
        let issued_at = self.clock.now();
        let ttl = ChronoDuration::from_std(self.ttl)
            .unwrap_or_else(|_| ChronoDuration::seconds(self.ttl.as_secs() as i64));
        let expires_at = issued_at + ttl;

        let claims = Claims {
            sub: user.id.as_str().to_string(),
            email: user.email.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&claims)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?,
        );

        let mut mac = self
            .mac()
            .map_err(|failure| ApplicationError::infrastructure(failure.message))?;
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(IssuedToken {
            token: format!("{payload}.{signature}"),
            issued_at,
            expires_at,
        })
    }
}

#[async_trait]
impl TokenVerifier for HmacTokenManager {
    async fn verify(&self, token: &str) -> AuthResult {
        let invalid = || AuthFailure::unauthorized("invalid token");

        let (payload, signature) = token.split_once('.').ok_or_else(invalid)?;
        let signature = URL_SAFE_NO_PAD.decode(signature).map_err(|_| invalid())?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        let claims: Claims = URL_SAFE_NO_PAD
            .decode(payload)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or_else(invalid)?;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(AuthFailure::unauthorized("token expired"));
        }

        let id = UserId::new(claims.sub).map_err(|_| invalid())?;
        Ok(User {
            id,
            email: claims.email,
        })
    }
}
