//! Numeric validation functions

use serde_json::Value;
use std::fmt::Display;

/// Validates minimum value (inclusive)
pub fn validate_min<T: PartialOrd + Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Value cannot be less than {}", min))
    }
}

/// Validates maximum value (inclusive)
pub fn validate_max<T: PartialOrd + Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Value cannot be more than {}", max))
    }
}

/// Validates an optional lower then upper bound; the lower bound is reported first
pub fn validate_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> Result<(), String> {
    if let Some(min) = min {
        validate_min(value, min)?;
    }
    if let Some(max) = max {
        validate_max(value, max)?;
    }
    Ok(())
}

/// Numeric reading of a raw input value.
///
/// JSON numbers are taken as-is and numeric strings (as typed into an input
/// box) are parsed. Anything else has no numeric reading.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
