// File: src/builder.rs
// Purpose: Build fresh data objects from a form configuration

use dynaform_types::FormConfiguration;
use serde_json::{Map, Value};

use crate::path::write_in_place;

/// Fresh object with every field path pre-populated: currency fields get an
/// `EUR 0` pair, every other kind the empty string. Declared defaults are
/// ignored.
pub fn build_empty_object(config: &FormConfiguration) -> Value {
    let mut object = Value::Object(Map::new());
    for field in config {
        write_in_place(&mut object, &field.path, field.empty_value());
    }
    object
}

/// Like [`build_empty_object`], but each field's declared default is used
/// where one exists.
pub fn build_default_object(config: &FormConfiguration) -> Value {
    let mut object = Value::Object(Map::new());
    for field in config {
        let value = field.default_value().unwrap_or_else(|| field.empty_value());
        write_in_place(&mut object, &field.path, value);
    }
    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynaform_types::{FieldDescriptor, FieldKind, FieldPath};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        raw.parse().unwrap()
    }

    fn config() -> FormConfiguration {
        FormConfiguration::new(vec![
            FieldDescriptor::new(
                "Name",
                path("person.name"),
                FieldKind::Text {
                    default_value: Some("Ada".into()),
                    placeholder: None,
                },
            ),
            FieldDescriptor::integer("Age", path("person.age")),
            FieldDescriptor::currency("Price", path("price"), ["EUR", "USD"]).with_min(1.0),
        ])
    }

    #[test]
    fn test_empty_object_ignores_defaults() {
        assert_eq!(
            build_empty_object(&config()),
            json!({
                "person": { "name": "", "age": "" },
                "price": { "currency": "EUR", "value": 0 }
            })
        );
    }

    #[test]
    fn test_default_object_applies_defaults() {
        assert_eq!(
            build_default_object(&config()),
            json!({
                "person": { "name": "Ada", "age": "" },
                "price": { "currency": "EUR", "value": 0 }
            })
        );
    }

    #[test]
    fn test_empty_configuration() {
        assert_eq!(build_empty_object(&FormConfiguration::default()), json!({}));
    }
}
