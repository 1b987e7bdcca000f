//! Authentication response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token type reported alongside every issued access token
pub const BEARER: &str = "Bearer";

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Identity echoed back by the protected endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub logged_in_as: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
