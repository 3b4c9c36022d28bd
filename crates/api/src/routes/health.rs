//! Liveness and readiness of the catalog.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    /// `"ok"` when the catalog can serve requests, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The database answered at all.
    pub db_reachable: bool,
    /// The `movies` and `genre` tables exist.
    pub catalog_ready: bool,
}

impl CatalogHealth {
    fn from_readiness(readiness: Result<bool, sqlx::Error>) -> Self {
        let db_reachable = readiness.is_ok();
        let catalog_ready = readiness.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Catalog readiness query failed");
            false
        });
        Self {
            status: if catalog_ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_reachable,
            catalog_ready,
        }
    }
}

async fn catalog_health(State(state): State<AppState>) -> Json<CatalogHealth> {
    let health = CatalogHealth::from_readiness(cinedex_db::catalog_ready(&state.pool).await);
    if !health.catalog_ready {
        tracing::debug!(db_reachable = health.db_reachable, "Catalog not ready");
    }
    Json(health)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
