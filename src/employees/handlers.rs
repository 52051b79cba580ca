use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::db::AppState;
use crate::error::{require, ApiError};
use crate::ident;

use super::dto::{CreateEmployeeRequest, Employee};
use super::repo::EmployeeRow;

#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let rows = EmployeeRow::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(EmployeeRow::into_employee).collect()))
}

#[instrument(skip(state))]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let row = EmployeeRow::find(&state.db, &key)
        .await?
        .ok_or(ApiError::NotFound("employee"))?;
    Ok(Json(row.into_employee()))
}

#[instrument(skip(state, req))]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let now = OffsetDateTime::now_utc();

    let row = EmployeeRow {
        id: Uuid::new_v4().to_string(),
        employee_id: req.employee_id.unwrap_or_else(ident::employee_id),
        first_name: require(req.first_name, "firstName")?,
        last_name: require(req.last_name, "lastName")?,
        email: req.email,
        phone: req.phone,
        department: require(req.department, "department")?,
        position: require(req.position, "position")?,
        start_date: require(req.start_date, "startDate")?,
        end_date: req.end_date,
        status: req.status.unwrap_or_else(|| "active".into()),
        address: req.address,
        signature: req.signature.unwrap_or_default(),
        materials: Some(serde_json::to_string(&req.materials)?),
        created_at: now,
        updated_at: now,
    };
    EmployeeRow::insert(&state.db, &row).await?;

    Ok((StatusCode::CREATED, Json(row.into_employee())))
}
