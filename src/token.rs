use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::AppConfig;

/// TokenKind
///
/// Discriminates the two credentials the server issues. Access tokens authorize
/// ordinary requests; refresh tokens are only ever accepted by the token-renewal
/// endpoint. The kind travels inside the signed claims, so it cannot be altered
/// without invalidating the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims
///
/// The payload structure carried inside every JSON Web Token (JWT) this server
/// issues. Claims are signed with the server's secret and validated on every
/// authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the UUID of the user the token was issued to. This is the
    /// primary key used to resolve the user's record and role.
    pub sub: Uuid,
    /// Which credential this is. Wire name matches the issued JSON: `tokenType`.
    #[serde(rename = "tokenType")]
    pub token_type: TokenKind,
    /// Issued At (iat): timestamp when the JWT was created.
    pub iat: usize,
    /// Expiration Time (exp): timestamp after which the JWT must not be accepted.
    pub exp: usize,
}

/// TokenError
///
/// Failures of the codec itself. Verification failures deliberately do not
/// distinguish bad-signature from expired from malformed at the type level;
/// the source error is kept for logging only.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("token verification failed")]
    Verification(#[source] jsonwebtoken::errors::Error),
    #[error("token payload is unreadable")]
    Unreadable,
}

/// TokenPair
///
/// The access/refresh pair produced at signup, signin, and refresh time.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// TokenCodec
///
/// Issues and verifies bearer tokens over a single shared HS256 secret. The
/// keys are derived once at startup and cloned into the application state;
/// per-request work is pure computation with no I/O.
///
/// `verify` is the only path that may feed an authorization decision.
/// `decode_insecure` exists for diagnostics and never checks the signature,
/// which is why it is an associated function that cannot even reach the keys.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AppConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_ttl: Duration::seconds(config.access_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_ttl_secs),
        }
    }

    /// issue
    ///
    /// Signs a token of the given kind for the given subject. The lifetime is
    /// explicit so callers cannot accidentally mint a long-lived access token
    /// with the refresh TTL.
    pub fn issue(&self, subject: Uuid, kind: TokenKind, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            token_type: kind,
            iat: now.timestamp() as usize,
            exp: (now + ttl).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// issue_pair
    ///
    /// Mints the standard access + refresh pair with the configured lifetimes.
    pub fn issue_pair(&self, subject: Uuid) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access: self.issue(subject, TokenKind::Access, self.access_ttl)?,
            refresh: self.issue(subject, TokenKind::Refresh, self.refresh_ttl)?,
        })
    }

    /// verify
    ///
    /// Decodes and validates a bare token (no `Bearer ` prefix; stripping the
    /// scheme is the access guard's job, done exactly once). Fails on bad
    /// signature, malformed input, and expiry alike.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();

        // Ensure expiration time validation is always active.
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Verification)
    }

    /// decode_insecure
    ///
    /// Reads the claims out of a token **without** checking the signature or
    /// expiry. Only for diagnostics (e.g. logging which subject an expired
    /// token belonged to); the result must never authorize anything.
    pub fn decode_insecure(token: &str) -> Result<Claims, TokenError> {
        let payload = token.split('.').nth(1).ok_or(TokenError::Unreadable)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Unreadable)?;

        serde_json::from_slice(&bytes).map_err(|_| TokenError::Unreadable)
    }
}
