use anyhow::Result;
use dynaform::{build_default_object, build_empty_object};
use std::path::Path;

use crate::util::load_configuration;

pub fn execute(config_path: &Path, defaults: bool) -> Result<()> {
    let config = load_configuration(config_path)?;

    let object = if defaults {
        build_default_object(&config)
    } else {
        build_empty_object(&config)
    };

    println!("{}", serde_json::to_string_pretty(&object)?);
    Ok(())
}
