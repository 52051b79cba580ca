use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::db::AppState;
use crate::error::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub active_employees: i64,
    pub total_materials: i64,
    pub pending_returns: i64,
    pub departments: i64,
}

/// Recomputed in full on every call; nothing is cached.
#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, ApiError> {
    Ok(Json(compute(&state.db).await?))
}

async fn compute(db: &SqlitePool) -> sqlx::Result<Stats> {
    let active_employees: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE status = 'active'")
            .fetch_one(db)
            .await?;
    let total_materials: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM materials")
        .fetch_one(db)
        .await?;
    let pending_returns: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM materials WHERE returned = 0 AND assigned_to IS NOT NULL",
    )
    .fetch_one(db)
    .await?;
    let departments: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT department) FROM employees")
        .fetch_one(db)
        .await?;

    Ok(Stats {
        active_employees,
        total_materials,
        pending_returns,
        departments,
    })
}
