//! Configuration for the Catalog API service.

use std::time::Duration;

use catalog_auth_core::AuthConfig;
use catalog_db::PoolOptions;

/// Default SQLite database, created next to the binary if missing
pub const DEFAULT_DATABASE_URL: &str = "sqlite:products.db?mode=rwc";

/// Catalog API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Database pool sizing
    pub pool: PoolOptions,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// Request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Database
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid("DB_MAX_CONNECTIONS"));
        }

        // Server port
        let http_port = parse_or(&lookup, "HTTP_PORT", 8080)?;

        // Signing secret (minimum 32 bytes, checked by AuthConfig)
        let jwt_secret = lookup("JWT_SECRET_KEY").ok_or(ConfigError::Missing("JWT_SECRET_KEY"))?;

        // Token lifetime (default 30 minutes)
        let token_ttl_minutes: u64 = parse_or(&lookup, "TOKEN_TTL_MINUTES", 30)?;
        let token_ttl_secs = token_ttl_minutes
            .checked_mul(60)
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::Invalid("TOKEN_TTL_MINUTES"))?;

        let bcrypt_cost: u32 = parse_or(&lookup, "BCRYPT_COST", 12)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid("BCRYPT_COST"));
        }

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECS"));
        }

        // Build auth config
        let auth = AuthConfig::try_new(jwt_secret)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_token_ttl(Duration::from_secs(token_ttl_secs))
            .with_bcrypt_cost(bcrypt_cost);

        Ok(Self {
            http_port,
            database_url,
            pool: PoolOptions {
                max_connections,
                ..PoolOptions::default()
            },
            auth,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
