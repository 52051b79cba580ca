use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::db::AppState;
use crate::error::{require, ApiError};

use super::dto::{CreateSignatureRequest, SignatureSummary};
use super::repo::SignatureRow;

#[instrument(skip(state, req))]
pub async fn create_signature(
    State(state): State<AppState>,
    Json(req): Json<CreateSignatureRequest>,
) -> Result<(StatusCode, Json<SignatureSummary>), ApiError> {
    let row = SignatureRow {
        id: Uuid::new_v4().to_string(),
        employee_id: require(req.employee_id, "employeeId")?,
        signature_data: require(req.signature_data, "signatureData")?,
        document_type: req.document_type.unwrap_or_else(|| "restitution".into()),
        created_at: OffsetDateTime::now_utc(),
    };
    SignatureRow::insert(&state.db, &row).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignatureSummary {
            id: row.id,
            employee_id: row.employee_id,
            document_type: row.document_type,
            created_at: row.created_at,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateSignatureRequest {
        CreateSignatureRequest {
            employee_id: Some("EMP001".into()),
            signature_data: Some("data:image/png;base64,iVBORw0KGgo=".into()),
            document_type: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_the_document_type() {
        let state = AppState::memory().await.unwrap();

        let (status, Json(summary)) = create_signature(State(state.clone()), Json(request()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(summary.employee_id, "EMP001");
        assert_eq!(summary.document_type, "restitution");

        let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signatures")
            .fetch_one(&state.db)
            .await
            .unwrap();
        assert_eq!(stored, 1);
    }

    #[tokio::test]
    async fn response_does_not_echo_the_payload() {
        let state = AppState::memory().await.unwrap();
        let (_, Json(summary)) = create_signature(State(state), Json(request()))
            .await
            .unwrap();

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("signatureData"));
        assert!(!json.contains("base64"));
    }

    #[tokio::test]
    async fn create_without_payload_is_a_client_error() {
        let state = AppState::memory().await.unwrap();
        let mut req = request();
        req.signature_data = None;

        let err = create_signature(State(state), Json(req)).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField("signatureData")));
    }
}
