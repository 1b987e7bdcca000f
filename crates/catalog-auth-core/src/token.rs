//! Signed bearer tokens with a fixed lifetime and a revocation list
//!
//! Tokens are HS256 JWTs carrying the username (`sub`), issue and expiry
//! timestamps and a random `jti`. A token is valid when its signature checks
//! out, it has not expired, and its exact string is absent from the
//! revocation store.

use std::sync::Arc;

use catalog_db::RevokedTokenRepository;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AuthConfig, AuthError};

/// Claims embedded in every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Username of the token owner
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiration (seconds since epoch)
    pub exp: i64,
    /// Unique token ID
    pub jti: String,
}

impl TokenClaims {
    /// Username the token was issued to
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed token string handed to the client
    pub token: String,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Identity established by a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

/// Signing primitive: encodes and decodes tokens with the shared secret.
///
/// Knows nothing about revocation.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: ChronoDuration,
}

impl TokenCodec {
    /// Create a codec from the auth configuration
    ///
    /// # Errors
    /// Returns [`AuthError::Configuration`] if the token lifetime does not
    /// fit in a signed duration.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let ttl = ChronoDuration::from_std(config.token_ttl).map_err(|_| {
            AuthError::Configuration(format!(
                "token lifetime out of range: {:?}",
                config.token_ttl
            ))
        })?;

        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> ChronoDuration {
        self.ttl
    }

    /// Sign a token for `username` as if issued at `issued_at`
    pub fn encode_at(
        &self,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let expiry = issued_at.checked_add_signed(self.ttl).ok_or_else(|| {
            tracing::error!("Token expiry overflows the calendar");
            AuthError::Internal("token expiry out of range".to_string())
        })?;

        let claims = TokenClaims {
            sub: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let expires_at = claims.expires_at();

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign token: {}", e);
                AuthError::Internal("failed to sign token".to_string())
            })?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Check signature, structure and expiry, returning the claims
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                tracing::debug!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            },
        )?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Token service: issuance plus verification against the revocation store
pub struct TokenService<R: RevokedTokenRepository> {
    codec: TokenCodec,
    revoked: Arc<R>,
}

impl<R: RevokedTokenRepository> TokenService<R> {
    /// Create a new token service
    pub fn new(config: &AuthConfig, revoked: Arc<R>) -> Result<Self, AuthError> {
        Ok(Self {
            codec: TokenCodec::new(config)?,
            revoked,
        })
    }

    /// Underlying signing primitive
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issue a token for `username`, expiring one TTL from now
    pub fn issue(&self, username: &str) -> Result<IssuedToken, AuthError> {
        self.issue_at(username, Utc::now())
    }

    /// Issue a token as if at `issued_at`
    pub fn issue_at(
        &self,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        self.codec.encode_at(username, issued_at)
    }

    /// Verify a token.
    ///
    /// The revocation list is consulted before any cryptographic check, so a
    /// revoked token reports [`AuthError::TokenRevoked`] even if it is also
    /// expired or malformed.
    pub async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        if self.revoked.is_revoked(token).await? {
            tracing::debug!("Token has been revoked");
            return Err(AuthError::TokenRevoked);
        }

        let claims = self.codec.decode(token)?;

        Ok(Identity {
            username: claims.sub,
        })
    }
}

impl<R: RevokedTokenRepository> std::fmt::Debug for TokenService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
