/**
 * Session Tokens
 *
 * This module issues and verifies the signed session tokens carried in the
 * session cookie. Tokens are HS256 JWTs whose subject is the user id; they
 * expire seven days after issuance and are never stored server-side.
 *
 * There is no revocation list: logging out only clears the client cookie, and
 * a token stays valid until `exp`.
 */

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session lifetime in seconds (7 days)
pub const SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Why a token was rejected
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token verification failed: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("invalid user id in token: {0}")]
    InvalidSubject(#[from] uuid::Error),
}

/// Signs and verifies session tokens with a server-held secret
#[derive(Clone)]
pub struct SessionTokens {
    keys: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionTokens {
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
        }
    }

    /// Create a token for a user, valid for seven days from now
    pub fn create_token(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_at(user_id, unix_now())
    }

    fn create_token_at(
        &self,
        user_id: Uuid,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: issued_at + SESSION_TTL_SECS,
            iat: issued_at,
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
    }

    /// Verify and decode a token
    ///
    /// Fails on a bad signature, a malformed token or an elapsed expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.keys.decoding, &validation)?;
        Ok(token_data.claims)
    }

    /// Extract the user id from a valid token
    pub fn user_id_from_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify_token(token)?;
        Ok(Uuid::parse_str(&claims.sub)?)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
