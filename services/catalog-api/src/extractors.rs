//! Axum extractors for authentication and validated request bodies

use axum::extract::{FromRef, FromRequest, FromRequestParts, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::Json;
use catalog_auth_core::{bearer_token, AuthError};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the `Authorization` header.
///
/// Taking this extractor is what puts a handler behind the auth gate.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    /// The raw token presented, needed to revoke it on logout
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().map_err(|_| AuthError::MalformedHeader))
            .transpose()?;
        let token = bearer_token(header)?;

        let identity = app_state.auth.authenticate(token).await.map_err(|e| {
            if e.is_unauthorized() {
                tracing::debug!(error = %e, "Auth gate rejected request");
            }
            e
        })?;

        Ok(AuthUser {
            username: identity.username,
            token: token.to_string(),
        })
    }
}

/// JSON body that has been deserialized and passed its `Validate` rules.
///
/// Parse failures and rule violations both surface as
/// [`ApiError::Validation`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
