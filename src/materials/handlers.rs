use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::db::AppState;
use crate::error::{require, ApiError};
use crate::ident;

use super::dto::CreateMaterialRequest;
use super::repo::Material;

#[instrument(skip(state))]
pub async fn list_materials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Material>>, ApiError> {
    let materials = Material::list(&state.db).await?;
    Ok(Json(materials))
}

#[instrument(skip(state, req))]
pub async fn create_material(
    State(state): State<AppState>,
    Json(req): Json<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<Material>), ApiError> {
    let now = OffsetDateTime::now_utc();

    // The assignment date is stamped only when the material starts out assigned.
    let assigned_date = req.assigned_to.is_some().then_some(now);

    let row = Material {
        id: Uuid::new_v4().to_string(),
        material_id: req.material_id.unwrap_or_else(ident::material_id),
        kind: require(req.kind, "type")?,
        brand: require(req.brand, "brand")?,
        model: require(req.model, "model")?,
        serial_number: require(req.serial_number, "serialNumber")?,
        assigned_to: req.assigned_to,
        condition: req.condition.unwrap_or_else(|| "Neuf".into()),
        purchase_date: req.purchase_date,
        warranty_end: req.warranty_end,
        assigned_date,
        returned: false,
        returned_date: None,
        created_at: now,
        updated_at: now,
    };
    Material::insert(&state.db, &row).await?;

    Ok((StatusCode::CREATED, Json(row)))
}
