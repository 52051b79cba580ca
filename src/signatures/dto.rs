use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignatureRequest {
    pub employee_id: Option<String>,
    pub signature_data: Option<String>,
    pub document_type: Option<String>,
}

/// Response for a stored signature. The raw payload is deliberately not
/// echoed back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSummary {
    pub id: String,
    pub employee_id: String,
    pub document_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
