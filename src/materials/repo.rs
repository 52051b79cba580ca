use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

const SELECT_ALL: &str = "SELECT * FROM materials";
const INSERT: &str = r#"
INSERT INTO materials (
    id, material_id, kind, brand, model, serial_number, assigned_to, condition,
    purchase_date, warranty_end, assigned_date, returned, returned_date,
    created_at, updated_at
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Material row; scalar fields only, so the stored shape is also the wire shape.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub material_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub assigned_to: Option<String>,
    pub condition: String,
    pub purchase_date: Option<String>,
    pub warranty_end: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub assigned_date: Option<OffsetDateTime>,
    pub returned: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub returned_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Material {
    pub async fn list(db: &SqlitePool) -> sqlx::Result<Vec<Material>> {
        sqlx::query_as(SELECT_ALL).fetch_all(db).await
    }

    pub async fn insert(db: &SqlitePool, row: &Material) -> sqlx::Result<()> {
        sqlx::query(INSERT)
            .bind(&row.id)
            .bind(&row.material_id)
            .bind(&row.kind)
            .bind(&row.brand)
            .bind(&row.model)
            .bind(&row.serial_number)
            .bind(&row.assigned_to)
            .bind(&row.condition)
            .bind(&row.purchase_date)
            .bind(&row.warranty_end)
            .bind(row.assigned_date)
            .bind(row.returned)
            .bind(row.returned_date)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::AppState;

    fn sample(material_id: &str) -> Material {
        let now = OffsetDateTime::now_utc();
        Material {
            id: uuid::Uuid::new_v4().to_string(),
            material_id: material_id.into(),
            kind: "Talkie-walkie".into(),
            brand: "Motorola".into(),
            model: "T82".into(),
            serial_number: "MT0001".into(),
            assigned_to: None,
            condition: "Neuf".into(),
            purchase_date: None,
            warranty_end: None,
            assigned_date: None,
            returned: false,
            returned_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_and_list_round_trip() {
        let state = AppState::memory().await.unwrap();
        Material::insert(&state.db, &sample("MATaaaa0001"))
            .await
            .unwrap();

        let materials = Material::list(&state.db).await.unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].material_id, "MATaaaa0001");
        assert!(!materials[0].returned);
        assert!(materials[0].assigned_date.is_none());
    }

    #[tokio::test]
    async fn duplicate_material_id_is_rejected() {
        let state = AppState::memory().await.unwrap();
        Material::insert(&state.db, &sample("MATdup00001"))
            .await
            .unwrap();

        let err = Material::insert(&state.db, &sample("MATdup00001"))
            .await
            .unwrap_err();
        let db_err = err.as_database_error().expect("database error");
        assert!(db_err.is_unique_violation());
    }

    #[test]
    fn material_serializes_with_wire_field_names() {
        let mut material = sample("MATjson0001");
        material.assigned_date = Some(OffsetDateTime::UNIX_EPOCH);

        let json = serde_json::to_value(&material).unwrap();
        assert_eq!(json["type"], "Talkie-walkie");
        assert_eq!(json["serialNumber"], "MT0001");
        assert_eq!(json["assignedDate"], "1970-01-01T00:00:00Z");
        assert_eq!(json["returnedDate"], serde_json::Value::Null);
    }
}
