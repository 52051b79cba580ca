use serde::Deserialize;

/// Body of `POST /api/materials`. Required fields are checked by the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub assigned_to: Option<String>,
    pub condition: Option<String>,
    pub purchase_date: Option<String>,
    pub warranty_end: Option<String>,
    pub material_id: Option<String>,
}
