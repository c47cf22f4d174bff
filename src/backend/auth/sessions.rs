/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens handed out at
 * signup and signin.
 *
 * Tokens are HS256 JWTs carrying the user ID plus issue and expiry times.
 * They are never stored server-side; possession of a valid, unexpired
 * token is the whole of a session.
 */

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signing and verification keys derived from the shared secret
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

impl TokenKeys {
    /// Create keys from a shared secret
    ///
    /// # Arguments
    /// * `secret` - HMAC secret
    /// * `ttl` - Lifetime of tokens issued with these keys
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Issue a token for a user, valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, now_secs())
    }

    /// Issue a token for a user as if it had been issued at `issued_at`
    ///
    /// # Arguments
    /// * `user_id` - User the token is bound to
    /// * `issued_at` - Unix timestamp placed in `iat`; `exp` is `iat + ttl`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            id: user_id,
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Returns `None` for anything that is not a well-formed, correctly
    /// signed, unexpired token. Never fails loudly on bad input.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Token verification failed: {}", e);
                None
            }
        }
    }
}
