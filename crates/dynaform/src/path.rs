// File: src/path.rs
// Purpose: Deep read/write over a nested JSON object addressed by dot paths

use dynaform_types::{FieldPath, Result};
use serde_json::{Map, Value};

/// Walk `path` through nested objects.
///
/// Returns `None` when a segment is missing or an intermediate value is not
/// an object.
pub fn read<'a>(object: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .try_fold(object, |node, segment| node.as_object()?.get(segment))
}

/// Copy of `object` with `value` placed at `path`; `object` is left untouched.
///
/// Missing intermediates, and intermediates holding a non-object value, are
/// replaced by empty objects on the way down.
pub fn write(object: &Value, path: &FieldPath, value: Value) -> Value {
    let mut updated = object.clone();
    write_in_place(&mut updated, path, value);
    updated
}

/// In-place variant of [`write`] for owners of the object
pub fn write_in_place(object: &mut Value, path: &FieldPath, value: Value) {
    let segments: Vec<&str> = path.segments().collect();
    write_segments(object, &segments, value);
}

/// [`read`] with an unparsed path
pub fn get<'a>(object: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let path = FieldPath::parse(path)?;
    Ok(read(object, &path))
}

/// [`write`] with an unparsed path
pub fn set(object: &Value, path: &str, value: Value) -> Result<Value> {
    let path = FieldPath::parse(path)?;
    Ok(write(object, &path, value))
}

fn write_segments(node: &mut Value, segments: &[&str], value: Value) {
    let Value::Object(map) = node else {
        *node = Value::Object(Map::new());
        return write_segments(node, segments, value);
    };

    match segments {
        [] => {}
        [leaf] => {
            map.insert(leaf.to_string(), value);
        }
        [head, rest @ ..] => {
            let child = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            write_segments(child, rest, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        raw.parse().unwrap()
    }

    #[test]
    fn test_read_nested() {
        let object = json!({ "address": { "city": "Berlin" } });
        assert_eq!(read(&object, &path("address.city")), Some(&json!("Berlin")));
        assert_eq!(read(&object, &path("address")), Some(&json!({ "city": "Berlin" })));
    }

    #[test]
    fn test_read_missing_or_through_scalar() {
        let object = json!({ "address": { "city": "Berlin" }, "name": "Ada" });
        assert_eq!(read(&object, &path("address.zip")), None);
        assert_eq!(read(&object, &path("company.name")), None);
        assert_eq!(read(&object, &path("name.first")), None);
        assert_eq!(read(&json!("scalar"), &path("a")), None);
    }

    #[test]
    fn test_write_creates_intermediates() {
        let object = json!({});
        let updated = write(&object, &path("a.b.c"), json!(1));
        assert_eq!(updated, json!({ "a": { "b": { "c": 1 } } }));
        assert_eq!(object, json!({}));
    }

    #[test]
    fn test_write_keeps_siblings() {
        let object = json!({ "address": { "city": "Berlin", "zip": "10115" }, "age": 3 });
        let updated = write(&object, &path("address.city"), json!("Paris"));
        assert_eq!(
            updated,
            json!({ "address": { "city": "Paris", "zip": "10115" }, "age": 3 })
        );
    }

    #[test]
    fn test_write_replaces_scalar_intermediate() {
        let object = json!({ "price": "" });
        let updated = write(&object, &path("price.value"), json!(5));
        assert_eq!(updated, json!({ "price": { "value": 5 } }));
    }

    #[test]
    fn test_write_into_non_object_root() {
        let updated = write(&Value::Null, &path("a"), json!(true));
        assert_eq!(updated, json!({ "a": true }));
    }

    #[test]
    fn test_string_wrappers_reject_empty_path() {
        let object = json!({ "a": 1 });
        assert!(get(&object, "").is_err());
        assert!(set(&object, "", json!(2)).is_err());
        assert_eq!(get(&object, "a").unwrap(), Some(&json!(1)));
        assert_eq!(set(&object, "b", json!(2)).unwrap(), json!({ "a": 1, "b": 2 }));
    }
}
