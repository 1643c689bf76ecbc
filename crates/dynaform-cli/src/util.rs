use anyhow::{bail, Context, Result};
use dynaform::{build_empty_object, FieldPath, FormConfiguration};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a form configuration file
pub fn load_configuration(path: &Path) -> Result<FormConfiguration> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration: {:?}", path))?;
    FormConfiguration::from_json_str(&content)
        .with_context(|| format!("Failed to parse configuration: {:?}", path))
}

/// Read the initial data object, or build an empty one from the configuration
pub fn load_object(path: Option<&Path>, config: &FormConfiguration) -> Result<Value> {
    let Some(path) = path else {
        return Ok(build_empty_object(config));
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data object: {:?}", path))?;
    let object: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data object: {:?}", path))?;

    if !object.is_object() {
        bail!("Data object in {:?} must be a JSON object", path);
    }

    Ok(object)
}

/// Split `path=value`; the value is JSON when it parses, plain text otherwise
pub fn parse_edit(raw: &str) -> Result<(FieldPath, Value)> {
    let (path, value) = raw
        .split_once('=')
        .with_context(|| format!("Edit '{}' is not in PATH=VALUE form", raw))?;

    let path: FieldPath = path
        .parse()
        .with_context(|| format!("Edit '{}' has an invalid path", raw))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    Ok((path, value))
}
