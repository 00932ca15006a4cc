//! Bearer token issuance and verification
//!
//! Tokens are compact HS256 JWTs carrying the caller's claims plus `iat`
//! and `exp`. Keys are derived once from the configured secret and shared
//! behind `Arc`, so the service is cheap to clone into every handler.

use super::expiry::parse_expiry;
use crate::config::JwtConfig;
use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Claim mapping carried inside a token
pub type TokenClaims = Map<String, Value>;

/// Failures surfaced to callers
///
/// Neither variant carries the underlying cause. The cause is logged where
/// the failure happens.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to authenticate token")]
    Signing,

    #[error("Invalid token")]
    Verification,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub(crate) struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub(crate) fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service for signing and verifying bearer tokens
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    expires_in: Duration,
    validation: Arc<Validation>,
}

impl TokenService {
    /// Create a service from a raw secret and token lifetime
    pub fn new(secret: &str, expires_in: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            keys: JwtKeys::new(secret),
            expires_in,
            validation: Arc::new(validation),
        }
    }

    /// Build the service from the `jwt` configuration section
    ///
    /// Fails when the configured lifetime cannot be parsed.
    pub fn from_config(config: &JwtConfig) -> anyhow::Result<Self> {
        let expires_in = parse_expiry(&config.expires_in)
            .with_context(|| format!("invalid jwt.expires_in {:?}", config.expires_in))?;
        Ok(Self::new(config.secret.expose_secret(), expires_in))
    }

    /// Lifetime applied to newly issued tokens
    #[inline]
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Sign `payload` into a bearer token
    ///
    /// A non-zero numeric `iat` in the payload is kept; otherwise the current
    /// time is used. A payload that already carries `exp` is rejected.
    pub fn sign(&self, payload: &TokenClaims) -> Result<String, TokenError> {
        self.encode_claims(payload).map_err(|e| {
            let cause = format!("{:#}", e);
            error!(?payload, error = %cause, "Failed to authenticate token");
            TokenError::Signing
        })
    }

    /// Verify `token` and return its claims, including `iat` and `exp`
    ///
    /// A token stops being valid at the second named by `exp`.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.decode_claims(token).map_err(|e| {
            let cause = format!("{:#}", e);
            error!(token, error = %cause, "Invalid token");
            TokenError::Verification
        })
    }

    fn decode_claims(&self, token: &str) -> anyhow::Result<TokenClaims> {
        let claims = decode::<TokenClaims>(token, self.keys.decoding(), &self.validation)?.claims;

        // The library only rejects exp < now
        let expires_at = claims
            .get("exp")
            .and_then(Value::as_f64)
            .context("exp claim is not a number")?;
        if expires_at <= Utc::now().timestamp() as f64 {
            bail!("token expired");
        }

        Ok(claims)
    }

    fn encode_claims(&self, payload: &TokenClaims) -> anyhow::Result<String> {
        if payload.contains_key("exp") {
            bail!("payload already has an exp claim");
        }

        let issued_at = match payload.get("iat") {
            None => Utc::now().timestamp(),
            // Zero counts as unset
            Some(Value::Number(n)) => match n.as_f64() {
                Some(secs) if secs != 0.0 => secs.floor() as i64,
                Some(_) => Utc::now().timestamp(),
                None => bail!("iat claim is not a finite number"),
            },
            Some(_) => bail!("iat claim must be a number"),
        };
        let expires_at = issued_at
            .checked_add(self.expires_in.num_seconds())
            .context("exp claim overflows")?;

        let mut claims = payload.clone();
        claims.insert("iat".to_string(), Value::from(issued_at));
        claims.insert("exp".to_string(), Value::from(expires_at));

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .context("signing primitive failed")
    }
}
