//! Auth errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No Authorization header on a protected call
    #[error("missing authorization token")]
    MissingToken,

    /// Authorization header present but not `<scheme> <token>`
    #[error("malformed authorization header")]
    MalformedHeader,

    /// Invalid token (malformed, bad signature, etc.)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Token was explicitly revoked by logout
    #[error("token revoked")]
    TokenRevoked,

    /// Invalid credentials (unknown user or wrong password)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Username already registered
    #[error("a user with that username already exists")]
    UsernameTaken,

    /// Password longer than bcrypt can hash without truncating
    #[error("password must be at most 72 bytes")]
    PasswordTooLong,

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingToken
            | Self::MalformedHeader
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::TokenRevoked
            | Self::InvalidCredentials => 401,
            Self::UsernameTaken | Self::PasswordTooLong => 400,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::MalformedHeader => "MALFORMED_HEADER",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenRevoked => "TOKEN_REVOKED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::PasswordTooLong => "VALIDATION_ERROR",
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error rejects the caller (as opposed to a server fault)
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == 401
    }
}

impl From<catalog_db::DbError> for AuthError {
    fn from(err: catalog_db::DbError) -> Self {
        tracing::error!("Database error: {}", err);
        Self::Database(err.to_string())
    }
}
