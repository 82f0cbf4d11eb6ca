//! Pre-submission validation
//!
//! Every declared field must be non-blank; numeric fields must also parse.
//! One generic message is reported for any failure.

use crate::schema::{FieldKind, RecordSchema};
use crate::state::FormRecord;

pub const REQUIRED_MESSAGE: &str = "All fields are required.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
    /// First failing field in declared order
    pub field: Option<String>,
}

impl ValidationResult {
    fn pass() -> Self {
        Self {
            valid: true,
            message: None,
            field: None,
        }
    }

    fn fail(field: &str) -> Self {
        Self {
            valid: false,
            message: Some(REQUIRED_MESSAGE.into()),
            field: Some(field.into()),
        }
    }
}

pub struct Validator;

impl Validator {
    pub fn validate(schema: &RecordSchema, record: &FormRecord) -> ValidationResult {
        for field in &schema.fields {
            let value = record.get(&field.name).unwrap_or_default().trim();
            let ok = match field.kind {
                FieldKind::Text | FieldKind::Choice => !value.is_empty(),
                FieldKind::Numeric => value.parse::<f64>().is_ok_and(f64::is_finite),
            };
            if !ok {
                tracing::debug!(field = %field.name, "validation failed");
                return ValidationResult::fail(&field.name);
            }
        }
        ValidationResult::pass()
    }
}
