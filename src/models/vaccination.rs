use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{AppError, ValidationError};
use crate::models::deserialize_command;
use crate::validation::{FieldRule, FieldType, Schema};

/// A stored vaccination row. `drug_id` is a loose reference: it is stored as
/// plain text and never checked against the drugs table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vaccination {
    pub id: Uuid,
    /// Patient name
    pub name: String,
    pub drug_id: String,
    pub dose: f32,
    pub date: NaiveDate,
}

impl Vaccination {
    /// Defensive check against a malformed storage response.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

const CREATE_VACCINATION_SCHEMA: Schema = Schema::new(&[
    FieldRule {
        name: "name",
        required: true,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "drug_id",
        required: true,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "dose",
        required: true,
        field_type: FieldType::Number { min: None },
    },
    FieldRule {
        name: "date",
        required: true,
        field_type: FieldType::Date,
    },
]);

const UPDATE_VACCINATION_SCHEMA: Schema = Schema::new(&[
    FieldRule {
        name: "name",
        required: false,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "drug_id",
        required: false,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "dose",
        required: false,
        field_type: FieldType::Number { min: None },
    },
    FieldRule {
        name: "date",
        required: false,
        field_type: FieldType::Date,
    },
]);

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVaccinationCommand {
    pub name: String,
    pub drug_id: String,
    pub dose: f32,
    pub date: NaiveDate,
}

impl CreateVaccinationCommand {
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        if raw.as_object().map_or(false, |o| o.is_empty()) {
            return Err(ValidationError::single(
                "vaccination",
                "The vaccination object cannot be empty",
            )
            .into());
        }
        let normalized = CREATE_VACCINATION_SCHEMA.validate(raw)?;
        deserialize_command(normalized)
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVaccinationCommand {
    pub name: Option<String>,
    pub drug_id: Option<String>,
    pub dose: Option<f32>,
    pub date: Option<NaiveDate>,
}

impl UpdateVaccinationCommand {
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        let normalized = UPDATE_VACCINATION_SCHEMA.validate(raw)?;
        deserialize_command(normalized)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.drug_id.is_none()
            && self.dose.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_command_accepts_timestamp_dates() {
        let cmd = CreateVaccinationCommand::parse(&json!({
            "name": "John Doe",
            "drug_id": "3f2c9d1e-5a7b-4c2d-9e1f-0a8b7c6d5e4f",
            "dose": 1.5,
            "date": "2012-04-23T18:25:43.511Z"
        }))
        .expect("vaccination payload should parse");
        assert_eq!(cmd.date, NaiveDate::from_ymd_opt(2012, 4, 23).unwrap());
        assert_eq!(cmd.dose, 1.5);
    }

    #[test]
    fn drug_id_is_any_text_not_a_uuid() {
        // loose reference: any string of 3+ characters is accepted
        let cmd = CreateVaccinationCommand::parse(&json!({
            "name": "John Doe",
            "drug_id": "XXXX-XXXX-XXXX-XXXX",
            "dose": 1,
            "date": "2023-01-01"
        }));
        assert!(cmd.is_ok());
    }

    #[test]
    fn create_rejects_empty_object() {
        assert!(CreateVaccinationCommand::parse(&json!({})).is_err());
    }

    #[test]
    fn update_command_with_no_fields_is_empty() {
        let cmd = UpdateVaccinationCommand::parse(&json!({})).expect("empty payload should parse");
        assert!(cmd.is_empty());
    }
}
