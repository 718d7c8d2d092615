use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::deserialize_command;
use crate::validation::{FieldRule, FieldType, Schema};

/// A stored user row. The password hash is never serialized into a response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

const SIGNUP_SCHEMA: Schema = Schema::new(&[
    FieldRule {
        name: "name",
        required: true,
        field_type: FieldType::Text { min_len: 3 },
    },
    FieldRule {
        name: "email",
        required: true,
        field_type: FieldType::Email,
    },
    FieldRule {
        name: "password",
        required: true,
        field_type: FieldType::Text { min_len: 1 },
    },
]);

const LOGIN_SCHEMA: Schema = Schema::new(&[
    FieldRule {
        name: "email",
        required: true,
        field_type: FieldType::Email,
    },
    FieldRule {
        name: "password",
        required: true,
        field_type: FieldType::Text { min_len: 8 },
    },
]);

#[derive(Debug, Clone, Deserialize)]
pub struct SignupCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupCommand {
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        let normalized = SIGNUP_SCHEMA.validate(raw)?;
        deserialize_command(normalized)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        let normalized = LOGIN_SCHEMA.validate(raw)?;
        deserialize_command(normalized)
    }
}
