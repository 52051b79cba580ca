use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Snapshot of a material assignment embedded in the employee record.
///
/// This is a denormalized copy of material state taken at creation time; it is
/// never reconciled with the materials table afterwards. Every field is
/// optional so that partial snapshots survive the round trip through the
/// JSON-encoded column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialAssignment {
    #[serde(default)]
    pub material_id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub assigned_date: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub returned: Option<bool>,
}

/// Employee as returned on the wire, with the materials column decoded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub signature: String,
    pub materials: Vec<MaterialAssignment>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of `POST /api/employees`. Required fields are checked by the handler
/// so that a missing one yields a 400 naming the field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub employee_id: Option<String>,
    pub signature: Option<String>,
    #[serde(default)]
    pub materials: Vec<MaterialAssignment>,
}
