use axum::extract::State;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::instrument;

use crate::db::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Hotel Material Management API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let reachable = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();

    Json(Health {
        status: "healthy",
        database: if reachable { "connected" } else { "unreachable" },
        timestamp: OffsetDateTime::now_utc(),
    })
}
