/// Declarative input validation.
///
/// A `Schema` lists per-field rules (required, type, minimum length/value,
/// email/UUID/date format). `Schema::validate` checks a raw JSON payload and
/// returns either a normalized object ready for deserialization into a typed
/// command, or a `ValidationError` carrying one message per violated field.
/// Textual fields are trimmed before length/format checks; unknown extra
/// fields are ignored. This layer never touches storage.

use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{FieldViolation, ValidationError};

const MIN_EMAIL_LENGTH: usize = 5; // Minimum valid email length
const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321
const MAX_TEXT_LENGTH: usize = 256;

lazy_static! {
    // RFC 5322 simplified email regex (practical validation)
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();
}

/// Type and constraints of a single field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    Text { min_len: usize },
    Email,
    Uuid,
    Number { min: Option<f64> },
    Boolean,
    Date,
}

/// Declarative rule for one field of a payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub field_type: FieldType,
}

/// An input schema: the full set of rules for one payload shape.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldRule],
}

impl Schema {
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    /// Checks `raw` against the schema.
    ///
    /// On success returns the normalized object: textual values trimmed,
    /// dates canonicalized to `YYYY-MM-DD`. Fields absent from the payload
    /// (or explicitly null) are absent from the result.
    pub fn validate(&self, raw: &Value) -> Result<Map<String, Value>, ValidationError> {
        let object = match raw.as_object() {
            Some(o) => o,
            None => {
                return Err(ValidationError::single(
                    "body",
                    "The request body must be a JSON object",
                ))
            }
        };

        let mut violations = Vec::new();
        let mut normalized = Map::new();

        for rule in self.fields {
            match object.get(rule.name) {
                None | Some(Value::Null) => {
                    if rule.required {
                        violations.push(FieldViolation {
                            field: rule.name.to_string(),
                            message: format!("The {} field is required", rule.name),
                        });
                    }
                }
                Some(value) => match check_field(rule, value) {
                    Ok(v) => {
                        normalized.insert(rule.name.to_string(), v);
                    }
                    Err(message) => violations.push(FieldViolation {
                        field: rule.name.to_string(),
                        message,
                    }),
                },
            }
        }

        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

fn check_field(rule: &FieldRule, value: &Value) -> Result<Value, String> {
    let name = rule.name;
    match rule.field_type {
        FieldType::Text { min_len } => {
            let text = expect_text(name, value)?;
            if text.len() < min_len {
                return Err(format!(
                    "The {} must be at least {} characters",
                    name, min_len
                ));
            }
            if text.len() > MAX_TEXT_LENGTH {
                return Err(format!(
                    "The {} must be at most {} characters",
                    name, MAX_TEXT_LENGTH
                ));
            }
            Ok(Value::String(text))
        }
        FieldType::Email => {
            let text = expect_text(name, value)?;
            if text.len() < MIN_EMAIL_LENGTH {
                return Err(format!(
                    "The {} must be at least {} characters",
                    name, MIN_EMAIL_LENGTH
                ));
            }
            if text.len() > MAX_EMAIL_LENGTH {
                return Err(format!(
                    "The {} must be at most {} characters",
                    name, MAX_EMAIL_LENGTH
                ));
            }
            if !EMAIL_REGEX.is_match(&text) {
                return Err(format!("The {} must be a valid email address", name));
            }
            Ok(Value::String(text))
        }
        FieldType::Uuid => {
            let text = expect_text(name, value)?;
            if Uuid::parse_str(&text).is_err() {
                return Err(format!("The {} must be a valid UUID", name));
            }
            Ok(Value::String(text))
        }
        FieldType::Number { min } => {
            let number = value
                .as_f64()
                .ok_or_else(|| format!("The {} must be a number", name))?;
            if let Some(min) = min {
                if number < min {
                    return Err(format!("The {} must be at least {}", name, min));
                }
            }
            Ok(value.clone())
        }
        FieldType::Boolean => {
            value
                .as_bool()
                .ok_or_else(|| format!("The {} field must be a boolean value", name))?;
            Ok(value.clone())
        }
        FieldType::Date => {
            let text = expect_text(name, value)?;
            let date = parse_date(&text)
                .ok_or_else(|| format!("The {} must be a valid date", name))?;
            Ok(Value::String(date.format("%Y-%m-%d").to_string()))
        }
    }
}

fn expect_text(name: &str, value: &Value) -> Result<String, String> {
    let raw = value
        .as_str()
        .ok_or_else(|| format!("The {} must be a text string", name))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("The {} cannot be empty", name));
    }
    Ok(trimmed.to_string())
}

/// Accepts a plain calendar date or an RFC 3339 timestamp.
fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}
