use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use super::dto::Employee;

const SELECT_ALL: &str = "SELECT * FROM employees";
const SELECT_BY_KEY: &str = "SELECT * FROM employees WHERE id = ?1 OR employee_id = ?1";
const INSERT: &str = r#"
INSERT INTO employees (
    id, employee_id, first_name, last_name, email, phone, department, position,
    start_date, end_date, status, address, signature, materials, created_at, updated_at
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Employee row as stored, with the materials column still JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
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
    pub materials: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl EmployeeRow {
    /// Decodes the denormalized materials column. Absent or malformed JSON
    /// degrades to an empty list, never an error.
    pub fn into_employee(self) -> Employee {
        let materials = self
            .materials
            .as_deref()
            .map(|raw| serde_json::from_str(raw).unwrap_or_default())
            .unwrap_or_default();

        Employee {
            id: self.id,
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            position: self.position,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            address: self.address,
            signature: self.signature,
            materials,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub async fn list(db: &SqlitePool) -> sqlx::Result<Vec<EmployeeRow>> {
        sqlx::query_as(SELECT_ALL).fetch_all(db).await
    }

    /// Looks up by either the internal id or the business `employee_id`.
    pub async fn find(db: &SqlitePool, key: &str) -> sqlx::Result<Option<EmployeeRow>> {
        sqlx::query_as(SELECT_BY_KEY).bind(key).fetch_optional(db).await
    }

    pub async fn insert(db: &SqlitePool, row: &EmployeeRow) -> sqlx::Result<()> {
        sqlx::query(INSERT)
            .bind(&row.id)
            .bind(&row.employee_id)
            .bind(&row.first_name)
            .bind(&row.last_name)
            .bind(&row.email)
            .bind(&row.phone)
            .bind(&row.department)
            .bind(&row.position)
            .bind(&row.start_date)
            .bind(&row.end_date)
            .bind(&row.status)
            .bind(&row.address)
            .bind(&row.signature)
            .bind(&row.materials)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(db)
            .await?;
        Ok(())
    }
}
