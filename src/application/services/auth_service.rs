//! Authentication service for Bearer token issuing and verification.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::identity::Identity;
use crate::error::AppError;

/// JWT payload carried by every access token.
///
/// `sub` is the username; `id` and `role` complete the [`Identity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub id: i64,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity::new(claims.id, claims.sub, claims.role)
    }
}

/// Service resolving request credentials into an [`Identity`].
///
/// Tokens are HS256-signed JWTs keyed by the server secret. Verification needs
/// no storage round-trip: a token with a valid signature and an unexpired
/// `exp` claim is the identity.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `secret` is the HMAC key; it must match the value used when tokens were
    /// issued.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Signs an access token for `identity` that expires after `ttl_minutes`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the lifetime is not positive, the
    /// expiry does not fit in a timestamp, or the token cannot be encoded.
    pub fn issue_token(&self, identity: &Identity, ttl_minutes: i64) -> Result<String, AppError> {
        if ttl_minutes <= 0 {
            return Err(AppError::internal("Token lifetime must be positive"));
        }

        let now = Utc::now();
        let exp = TimeDelta::try_minutes(ttl_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::internal("Token lifetime out of range"))?;

        let claims = Claims {
            sub: identity.username.clone(),
            id: identity.id,
            role: identity.role.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to issue token")
        })
    }

    /// Verifies a raw Bearer token and returns the caller it names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, signed
    /// with another key, expired, or lacks any identity claim.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            AppError::unauthorized("Could not validate credentials")
        })?;

        Ok(data.claims.into())
    }
}
