use uuid::Uuid;

use crate::error::{AppError, ValidationError};
use crate::models::{CreateVaccinationCommand, UpdateVaccinationCommand, Vaccination};
use crate::repository::VaccinationRepository;
use crate::services::{AffectedRows, DeleteConfirmation};

pub struct VaccinationService {
    vaccinations: VaccinationRepository,
}

impl VaccinationService {
    pub fn new(vaccinations: VaccinationRepository) -> Self {
        Self { vaccinations }
    }

    /// Persists a new vaccination and returns the stored record. The
    /// referenced drug_id is deliberately not checked against the drugs
    /// table.
    pub async fn create(&self, cmd: CreateVaccinationCommand) -> Result<Vaccination, AppError> {
        self.vaccinations.insert(&cmd).await
    }

    /// Returns all vaccinations. An empty table is an error, not an empty
    /// list.
    pub async fn find_all(&self) -> Result<Vec<Vaccination>, AppError> {
        let vaccinations = self.vaccinations.find_all().await?;
        if vaccinations.is_empty() {
            return Err(AppError::NotFound("No vaccinations found".to_string()));
        }
        Ok(vaccinations)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Vaccination, AppError> {
        let vaccination = self
            .vaccinations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vaccination with ID {} not found", id)))?;

        if vaccination.is_blank() {
            return Err(
                ValidationError::single("vaccination", "Vaccination object is empty").into(),
            );
        }
        Ok(vaccination)
    }

    /// Applies a partial update, then re-fetches the row as the source of
    /// truth. The write and the re-read are not atomic: a concurrent delete
    /// between the two steps surfaces as NotFound on the re-fetch.
    pub async fn update(
        &self,
        id: Uuid,
        cmd: UpdateVaccinationCommand,
    ) -> Result<Vaccination, AppError> {
        if cmd.is_empty() {
            return Err(ValidationError::single(
                "vaccination",
                "The vaccination object cannot be empty",
            )
            .into());
        }

        let affected = self.vaccinations.update_by_id(id, &cmd).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "Vaccination with ID {} not found",
                id
            )));
        }

        self.vaccinations.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Vaccination with ID {} not found after update", id))
        })
    }

    pub async fn remove(&self, id: Uuid) -> Result<DeleteConfirmation, AppError> {
        let affected = self.vaccinations.delete_by_id(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "Vaccination with ID {} not found",
                id
            )));
        }

        Ok(DeleteConfirmation {
            message: format!("Vaccination with ID {} has been deleted", id),
            status_code: 200,
            data: AffectedRows { affected },
        })
    }
}
