/// Entity rows and the validated commands that create or mutate them.

mod drug;
mod user;
mod vaccination;

pub use drug::{CreateDrugCommand, Drug, UpdateDrugCommand};
pub use user::{LoginCommand, SignupCommand, User};
pub use vaccination::{CreateVaccinationCommand, UpdateVaccinationCommand, Vaccination};

use crate::error::AppError;

/// Deserializes a schema-normalized object into its typed command.
/// A mismatch here means the schema and the command struct drifted apart.
pub(crate) fn deserialize_command<T: serde::de::DeserializeOwned>(
    normalized: serde_json::Map<String, serde_json::Value>,
) -> Result<T, AppError> {
    serde_json::from_value(serde_json::Value::Object(normalized))
        .map_err(|e| AppError::Internal(format!("Normalized payload failed to deserialize: {}", e)))
}
