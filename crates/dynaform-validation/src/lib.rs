//! Dynaform Validation
//!
//! Pure validation of one field value against its descriptor. Rules run in a
//! fixed order and the first failure wins, so a field surfaces at most one
//! message at a time:
//!
//! 1. required: a blank value on a required field
//! 2. numeric bounds (integer and currency kinds): lower bound, then upper
//!
//! Nothing here holds state; callers record outcomes in their error map.

pub mod numeric;
pub mod required;

pub use numeric::{as_number, validate_bounds, validate_max, validate_min};
pub use required::{is_blank, is_blank_for, validate_required, REQUIRED_MESSAGE};

use dynaform_types::{FieldDescriptor, FieldType};
use serde::Serialize;
use serde_json::Value;

/// Result of validating a single field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl ValidationOutcome {
    /// Create a successful outcome
    pub fn success() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Create a failed outcome carrying its message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Convert from a validator `Result`
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(message) => Self::failure(message),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The message, if the outcome is a failure
    pub fn error(&self) -> Option<&str> {
        if self.valid {
            None
        } else {
            Some(&self.message)
        }
    }
}

/// Validate `value` against `field`. `None` stands for a value that is not
/// present in the data object at all.
pub fn validate(field: &FieldDescriptor, value: Option<&Value>) -> ValidationOutcome {
    ValidationOutcome::from_result(check(field, value))
}

fn check(field: &FieldDescriptor, value: Option<&Value>) -> Result<(), String> {
    validate_required(field, value)?;

    let (min, max) = field.bounds();
    if min.is_none() && max.is_none() {
        return Ok(());
    }

    match amount_of(field, value) {
        Some(amount) => validate_bounds(amount, min, max),
        // No numeric reading: bounds do not apply
        None => Ok(()),
    }
}

/// The number bounds are checked against: the `value` member of a currency
/// pair, or the scalar itself.
fn amount_of(field: &FieldDescriptor, value: Option<&Value>) -> Option<f64> {
    let value = value?;
    match (field.field_type(), value) {
        (FieldType::Currency, Value::Object(pair)) => pair.get("value").and_then(as_number),
        (FieldType::Integer | FieldType::Currency, scalar) => as_number(scalar),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynaform_types::FieldPath;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        raw.parse().unwrap()
    }

    #[test]
    fn test_required_wins_over_bounds() {
        let age = FieldDescriptor::integer("Age", path("age"))
            .with_min(1.0)
            .with_required(true);

        let outcome = validate(&age, Some(&json!("")));
        assert_eq!(outcome, ValidationOutcome::failure(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = ValidationOutcome::success();
        assert!(ok.is_valid());
        assert_eq!(ok.error(), None);

        let failed = ValidationOutcome::failure("nope");
        assert!(!failed.is_valid());
        assert_eq!(failed.error(), Some("nope"));
    }

    #[test]
    fn test_text_ignores_numeric_content() {
        let name = FieldDescriptor::text("Name", path("name"));
        assert!(validate(&name, Some(&json!("12345"))).is_valid());
        assert!(validate(&name, None).is_valid());
    }
}
