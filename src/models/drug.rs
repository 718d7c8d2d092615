use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{AppError, ValidationError};
use crate::models::deserialize_command;
use crate::validation::{FieldRule, FieldType, Schema};

/// A stored drug row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Drug {
    pub id: Uuid,
    pub name: String,
    pub approved: bool,
    pub min_dose: f32,
    pub max_dose: f32,
    pub available_at: NaiveDate,
}

impl Drug {
    /// Defensive check against a malformed storage response.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

const CREATE_DRUG_SCHEMA: Schema = Schema::new(&[
    FieldRule {
        name: "name",
        required: true,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "approved",
        required: true,
        field_type: FieldType::Boolean,
    },
    FieldRule {
        name: "min_dose",
        required: true,
        field_type: FieldType::Number { min: Some(0.0) },
    },
    FieldRule {
        name: "max_dose",
        required: true,
        field_type: FieldType::Number { min: Some(0.0) },
    },
    FieldRule {
        name: "available_at",
        required: true,
        field_type: FieldType::Date,
    },
]);

const UPDATE_DRUG_SCHEMA: Schema = Schema::new(&[
    FieldRule {
        name: "name",
        required: false,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "approved",
        required: false,
        field_type: FieldType::Boolean,
    },
    FieldRule {
        name: "min_dose",
        required: false,
        field_type: FieldType::Number { min: Some(0.0) },
    },
    FieldRule {
        name: "max_dose",
        required: false,
        field_type: FieldType::Number { min: Some(0.0) },
    },
    FieldRule {
        name: "available_at",
        required: false,
        field_type: FieldType::Date,
    },
]);

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDrugCommand {
    pub name: String,
    pub approved: bool,
    pub min_dose: f32,
    pub max_dose: f32,
    pub available_at: NaiveDate,
}

impl CreateDrugCommand {
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        if raw.as_object().map_or(false, |o| o.is_empty()) {
            return Err(
                ValidationError::single("drug", "The drug object cannot be empty").into(),
            );
        }
        let normalized = CREATE_DRUG_SCHEMA.validate(raw)?;
        deserialize_command(normalized)
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDrugCommand {
    pub name: Option<String>,
    pub approved: Option<bool>,
    pub min_dose: Option<f32>,
    pub max_dose: Option<f32>,
    pub available_at: Option<NaiveDate>,
}

impl UpdateDrugCommand {
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        let normalized = UPDATE_DRUG_SCHEMA.validate(raw)?;
        deserialize_command(normalized)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.approved.is_none()
            && self.min_dose.is_none()
            && self.max_dose.is_none()
            && self.available_at.is_none()
    }
}
