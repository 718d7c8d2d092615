use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CreateDrugCommand, Drug, UpdateDrugCommand};

/// Repository for the `drugs` table.
#[derive(Clone)]
pub struct DrugRepository {
    pool: PgPool,
}

impl DrugRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new drug and returns the stored row, generated id included.
    pub async fn insert(&self, cmd: &CreateDrugCommand) -> Result<Drug, AppError> {
        let drug = sqlx::query_as::<_, Drug>(
            r#"
            INSERT INTO drugs (id, name, approved, min_dose, max_dose, available_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, approved, min_dose, max_dose, available_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&cmd.name)
        .bind(cmd.approved)
        .bind(cmd.min_dose)
        .bind(cmd.max_dose)
        .bind(cmd.available_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(drug)
    }

    pub async fn find_all(&self) -> Result<Vec<Drug>, AppError> {
        let drugs = sqlx::query_as::<_, Drug>(
            "SELECT id, name, approved, min_dose, max_dose, available_at FROM drugs",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(drugs)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Drug>, AppError> {
        let drug = sqlx::query_as::<_, Drug>(
            "SELECT id, name, approved, min_dose, max_dose, available_at FROM drugs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(drug)
    }

    /// Applies a partial update; fields absent from the command keep their
    /// stored values. Returns the affected-row count.
    pub async fn update_by_id(&self, id: Uuid, cmd: &UpdateDrugCommand) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE drugs
            SET name = COALESCE($2, name),
                approved = COALESCE($3, approved),
                min_dose = COALESCE($4, min_dose),
                max_dose = COALESCE($5, max_dose),
                available_at = COALESCE($6, available_at)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&cmd.name)
        .bind(cmd.approved)
        .bind(cmd.min_dose)
        .bind(cmd.max_dose)
        .bind(cmd.available_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the row matching `id` and returns the affected-row count.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM drugs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
