use sqlx::SqlitePool;
use time::OffsetDateTime;

const INSERT: &str = r#"
INSERT INTO signatures (id, employee_id, signature_data, document_type, created_at)
VALUES (?, ?, ?, ?, ?)
"#;

#[derive(Debug, Clone)]
pub struct SignatureRow {
    pub id: String,
    pub employee_id: String,
    pub signature_data: String,
    pub document_type: String,
    pub created_at: OffsetDateTime,
}

impl SignatureRow {
    pub async fn insert(db: &SqlitePool, row: &SignatureRow) -> sqlx::Result<()> {
        sqlx::query(INSERT)
            .bind(&row.id)
            .bind(&row.employee_id)
            .bind(&row.signature_data)
            .bind(&row.document_type)
            .bind(row.created_at)
            .execute(db)
            .await?;
        Ok(())
    }
}
