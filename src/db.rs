use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::employees::{EmployeeRow, MaterialAssignment};
use crate::materials::Material;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());

        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .context("connect to database")?;

        init_schema(&db).await.context("create tables")?;
        seed(&db).await.context("insert example data")?;

        Ok(Self { db, config })
    }

    /// State backed by an in-memory database, without seed data. Used by tests.
    pub async fn memory() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());

        // A pool of in-memory connections would each see a distinct database.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        init_schema(&db).await?;

        Ok(Self { db, config })
    }
}

const CREATE_EMPLOYEES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id TEXT PRIMARY KEY,
    employee_id TEXT UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    department TEXT NOT NULL,
    position TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT,
    status TEXT NOT NULL DEFAULT 'active',
    address TEXT,
    signature TEXT NOT NULL DEFAULT '',
    materials TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

const CREATE_MATERIALS: &str = r#"
CREATE TABLE IF NOT EXISTS materials (
    id TEXT PRIMARY KEY,
    material_id TEXT UNIQUE,
    kind TEXT NOT NULL,
    brand TEXT NOT NULL,
    model TEXT NOT NULL,
    serial_number TEXT NOT NULL,
    assigned_to TEXT,
    condition TEXT NOT NULL DEFAULT 'Neuf',
    purchase_date TEXT,
    warranty_end TEXT,
    assigned_date TEXT,
    returned BOOLEAN NOT NULL DEFAULT 0,
    returned_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

const CREATE_SIGNATURES: &str = r#"
CREATE TABLE IF NOT EXISTS signatures (
    id TEXT PRIMARY KEY,
    employee_id TEXT NOT NULL,
    signature_data TEXT NOT NULL,
    document_type TEXT NOT NULL DEFAULT 'restitution',
    created_at TEXT NOT NULL
)
"#;

/// Idempotently creates the three tables. No migrations: the schema is fixed.
pub async fn init_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(CREATE_EMPLOYEES).execute(db).await?;
    sqlx::query(CREATE_MATERIALS).execute(db).await?;
    sqlx::query(CREATE_SIGNATURES).execute(db).await?;
    Ok(())
}

/// Inserts one example employee and one example material, linked through the
/// employee's generated id. Runs only against an empty employees table.
pub async fn seed(db: &SqlitePool) -> anyhow::Result<()> {
    let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(db)
        .await?;
    if employees > 0 {
        return Ok(());
    }

    tracing::info!("empty database, inserting example data");
    let now = OffsetDateTime::now_utc();

    let snapshot = MaterialAssignment {
        material_id: Some("MAT001".into()),
        kind: Some("Ordinateur portable".into()),
        brand: Some("Dell".into()),
        model: Some("Latitude 5520".into()),
        serial_number: Some("DL123456789".into()),
        assigned_date: Some("2024-01-15".into()),
        condition: Some("Neuf".into()),
        returned: Some(false),
    };

    let employee = EmployeeRow {
        id: Uuid::new_v4().to_string(),
        employee_id: "EMP001".into(),
        first_name: "Marie".into(),
        last_name: "Dupont".into(),
        email: Some("marie.dupont@radisson.com".into()),
        phone: Some("+33 6 12 34 56 78".into()),
        department: "Réception".into(),
        position: "Réceptionniste".into(),
        start_date: "2024-01-15".into(),
        end_date: None,
        status: "active".into(),
        address: Some("123 Rue de l'Hôtel, 75001 Paris".into()),
        signature: String::new(),
        materials: Some(serde_json::to_string(&vec![snapshot])?),
        created_at: now,
        updated_at: now,
    };
    EmployeeRow::insert(db, &employee).await?;

    let material = Material {
        id: Uuid::new_v4().to_string(),
        material_id: "MAT001".into(),
        kind: "Ordinateur portable".into(),
        brand: "Dell".into(),
        model: "Latitude 5520".into(),
        serial_number: "DL123456789".into(),
        assigned_to: Some(employee.id.clone()),
        condition: "Neuf".into(),
        purchase_date: None,
        warranty_end: None,
        assigned_date: Some(now),
        returned: false,
        returned_date: None,
        created_at: now,
        updated_at: now,
    };
    Material::insert(db, &material).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_creates_the_three_tables() {
        let state = AppState::memory().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&state.db)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(names, vec!["employees", "materials", "signatures"]);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let state = AppState::memory().await.unwrap();
        init_schema(&state.db).await.unwrap();
    }

    #[tokio::test]
    async fn seed_runs_once() {
        let state = AppState::memory().await.unwrap();
        seed(&state.db).await.unwrap();
        seed(&state.db).await.unwrap();

        let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&state.db)
            .await
            .unwrap();
        let materials: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM materials")
            .fetch_one(&state.db)
            .await
            .unwrap();
        assert_eq!(employees, 1);
        assert_eq!(materials, 1);
    }

    #[tokio::test]
    async fn seed_links_the_material_to_the_employee() {
        let state = AppState::memory().await.unwrap();
        seed(&state.db).await.unwrap();

        let employee = EmployeeRow::find(&state.db, "EMP001")
            .await
            .unwrap()
            .unwrap();
        let material: (Option<String>,) =
            sqlx::query_as("SELECT assigned_to FROM materials WHERE material_id = 'MAT001'")
                .fetch_one(&state.db)
                .await
                .unwrap();
        assert_eq!(material.0.as_deref(), Some(employee.id.as_str()));
    }
}
