//! Liveness and readiness checks

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
}

/// Readiness report; the same body is returned with 200 or 503
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub database: DatabaseStatus,
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub reachable: bool,
    /// Connections currently open
    pub connections: u32,
    /// Open connections not checked out
    pub idle: usize,
}

/// GET /health
pub async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// GET /ready
///
/// Ready once the store answers a query.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let reachable = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store unreachable");
            false
        }
    };

    let status = if reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let report = Readiness {
        ready: reachable,
        database: DatabaseStatus {
            reachable,
            connections: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    };

    (status, Json(report))
}
