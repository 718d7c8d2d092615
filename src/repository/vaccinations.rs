use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CreateVaccinationCommand, UpdateVaccinationCommand, Vaccination};

/// Repository for the `vaccinations` table. `drug_id` is stored as plain
/// text; no join against the drugs table is ever made.
#[derive(Clone)]
pub struct VaccinationRepository {
    pool: PgPool,
}

impl VaccinationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new vaccination and returns the stored row.
    pub async fn insert(&self, cmd: &CreateVaccinationCommand) -> Result<Vaccination, AppError> {
        let vaccination = sqlx::query_as::<_, Vaccination>(
            r#"
            INSERT INTO vaccinations (id, name, drug_id, dose, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, drug_id, dose, date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&cmd.name)
        .bind(&cmd.drug_id)
        .bind(cmd.dose)
        .bind(cmd.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(vaccination)
    }

    pub async fn find_all(&self) -> Result<Vec<Vaccination>, AppError> {
        let vaccinations = sqlx::query_as::<_, Vaccination>(
            "SELECT id, name, drug_id, dose, date FROM vaccinations",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vaccinations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccination>, AppError> {
        let vaccination = sqlx::query_as::<_, Vaccination>(
            "SELECT id, name, drug_id, dose, date FROM vaccinations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vaccination)
    }

    /// Applies a partial update; fields absent from the command keep their
    /// stored values. Returns the affected-row count.
    pub async fn update_by_id(
        &self,
        id: Uuid,
        cmd: &UpdateVaccinationCommand,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vaccinations
            SET name = COALESCE($2, name),
                drug_id = COALESCE($3, drug_id),
                dose = COALESCE($4, dose),
                date = COALESCE($5, date)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&cmd.name)
        .bind(&cmd.drug_id)
        .bind(cmd.dose)
        .bind(cmd.date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the row matching `id` and returns the affected-row count.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vaccinations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
