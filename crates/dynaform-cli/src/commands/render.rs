use anyhow::{Context, Result};
use colored::Colorize;
use dynaform::{FormRenderer, FormState, Settings};
use std::fs;
use std::path::Path;

use crate::util::{load_configuration, load_object};

pub fn execute(
    config_path: &Path,
    object_path: Option<&Path>,
    settings_path: &Path,
    out: Option<&Path>,
) -> Result<()> {
    let config = load_configuration(config_path)?;
    let object = load_object(object_path, &config)?;
    let settings = Settings::load(settings_path)?;

    let state = FormState::for_configuration(object, &config);
    let page = FormRenderer::new(settings)
        .render_page(&state, &config)
        .into_string();

    match out {
        Some(out) => {
            fs::write(out, &page).with_context(|| format!("Failed to write page: {:?}", out))?;
            eprintln!(
                "{} {} fields to {}",
                "Rendered".green().bold(),
                config.len(),
                out.display().to_string().cyan()
            );
        }
        None => println!("{}", page),
    }

    Ok(())
}
