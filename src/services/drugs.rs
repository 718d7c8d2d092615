use uuid::Uuid;

use crate::error::{AppError, ValidationError};
use crate::models::{CreateDrugCommand, Drug, UpdateDrugCommand};
use crate::repository::DrugRepository;
use crate::services::{AffectedRows, DeleteConfirmation};

pub struct DrugsService {
    drugs: DrugRepository,
}

impl DrugsService {
    pub fn new(drugs: DrugRepository) -> Self {
        Self { drugs }
    }

    /// Persists a new drug and returns the stored record, generated id
    /// included.
    pub async fn create(&self, cmd: CreateDrugCommand) -> Result<Drug, AppError> {
        self.drugs.insert(&cmd).await
    }

    /// Returns all drugs. An empty table is an error, not an empty list.
    pub async fn find_all(&self) -> Result<Vec<Drug>, AppError> {
        let drugs = self.drugs.find_all().await?;
        if drugs.is_empty() {
            return Err(AppError::NotFound("No drugs found".to_string()));
        }
        Ok(drugs)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Drug, AppError> {
        let drug = self
            .drugs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Drug with ID {} not found", id)))?;

        if drug.is_blank() {
            return Err(ValidationError::single("drug", "Drug object is empty").into());
        }
        Ok(drug)
    }

    /// Applies a partial update, then re-fetches the row as the source of
    /// truth. The write and the re-read are not atomic: a concurrent delete
    /// between the two steps surfaces as NotFound on the re-fetch.
    pub async fn update(&self, id: Uuid, cmd: UpdateDrugCommand) -> Result<Drug, AppError> {
        if cmd.is_empty() {
            return Err(
                ValidationError::single("drug", "The drug object cannot be empty").into(),
            );
        }

        let affected = self.drugs.update_by_id(id, &cmd).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Drug with ID {} not found", id)));
        }

        self.drugs.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Drug with ID {} not found after update", id))
        })
    }

    pub async fn remove(&self, id: Uuid) -> Result<DeleteConfirmation, AppError> {
        let affected = self.drugs.delete_by_id(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Drug with ID {} not found", id)));
        }

        Ok(DeleteConfirmation {
            message: format!("Drug with ID {} has been deleted", id),
            status_code: 200,
            data: AffectedRows { affected },
        })
    }
}
