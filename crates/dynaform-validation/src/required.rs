//! Required-value checks

use dynaform_types::{FieldDescriptor, FieldType};
use serde_json::Value;

/// Message shown for a required field left empty
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Absent, null and the empty string all count as "no value"
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Blank check for a given field kind.
///
/// A currency pair is blank when the pair itself is blank or when its amount
/// is blank. A zero amount is a value, not a blank.
pub fn is_blank_for(field: &FieldDescriptor, value: Option<&Value>) -> bool {
    if is_blank(value) {
        return true;
    }

    match (field.field_type(), value) {
        (FieldType::Currency, Some(Value::Object(pair))) => is_blank(pair.get("value")),
        _ => false,
    }
}

/// Validates presence for required fields
pub fn validate_required(field: &FieldDescriptor, value: Option<&Value>) -> Result<(), String> {
    if field.required && is_blank_for(field, value) {
        Err(REQUIRED_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn currency() -> FieldDescriptor {
        FieldDescriptor::currency("Price", "price".parse().unwrap(), ["EUR"])
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!(" "))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
        assert!(!is_blank(Some(&json!({}))));
    }

    #[test]
    fn test_currency_amount_presence() {
        let field = currency();
        assert!(is_blank_for(&field, Some(&json!({ "currency": "EUR" }))));
        assert!(is_blank_for(&field, Some(&json!({ "currency": "EUR", "value": "" }))));
        assert!(!is_blank_for(&field, Some(&json!({ "currency": "EUR", "value": 0 }))));
    }

    #[test]
    fn test_optional_field_never_required() {
        let field = currency();
        assert!(validate_required(&field, None).is_ok());

        let field = field.with_required(true);
        assert_eq!(validate_required(&field, None).unwrap_err(), REQUIRED_MESSAGE);
    }
}
