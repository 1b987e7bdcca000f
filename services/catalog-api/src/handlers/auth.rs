//! Authentication handlers (register, login, logout, protected)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_auth_core::MAX_PASSWORD_BYTES;
use catalog_types::{LoginResponse, MessageResponse, WhoAmIResponse, BEARER};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Username/password body shared by register and login
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(
        required(message = "Username field is required"),
        length(min = 1, message = "Username field is required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Password field is required"),
        length(min = 1, message = "Password field is required"),
        custom(function = "password_fits_hash")
    )]
    pub password: Option<String>,
}

/// bcrypt only reads the first 72 bytes of a password
fn password_fits_hash(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut err = ValidationError::new("too_long");
        err.message = Some(format!("Password must be at most {MAX_PASSWORD_BYTES} bytes").into());
        return Err(err);
    }
    Ok(())
}

impl CredentialsRequest {
    fn into_parts(self) -> ApiResult<(String, String)> {
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(ApiError::invalid_body("incomplete credentials")),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let (username, password) = req.into_parts()?;
    state.auth.register(&username, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// POST /login
///
/// Fields are validated before any lookup happens.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (username, password) = req.into_parts()?;
    let issued = state.auth.login(&username, &password).await?;

    Ok(Json(LoginResponse {
        access_token: issued.token,
        token_type: BEARER.to_string(),
        expires_at: issued.expires_at,
    }))
}

/// POST /logout
///
/// Revoke the token that authenticated this request
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let identity = catalog_auth_core::Identity {
        username: user.username,
    };
    state.auth.logout(&identity, &user.token).await?;

    Ok(Json(MessageResponse::new("Successfully logged out")))
}

/// GET /protected
pub async fn protected(user: AuthUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        logged_in_as: user.username,
    })
}
