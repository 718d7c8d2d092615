mod auth;
mod drugs;
mod health_check;
mod vaccination;

pub use auth::{login, signup};
pub use drugs::{create_drug, delete_drug, get_drug, list_drugs, update_drug};
pub use health_check::health_check;
pub use vaccination::{
    create_vaccination, delete_vaccination, get_vaccination, list_vaccinations,
    update_vaccination,
};

use uuid::Uuid;

use crate::error::{AppError, ValidationError};

/// Delete routes take the id as raw text and validate it explicitly, so a
/// malformed id surfaces as a field-level validation failure.
pub(crate) fn parse_delete_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ValidationError::single("id", "The id must be a valid UUID").into())
}
