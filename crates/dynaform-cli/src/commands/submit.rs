use anyhow::Result;
use colored::Colorize;
use dynaform::{FormConfiguration, FormState, SubmitOutcome};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

use crate::util::{load_configuration, load_object, parse_edit};

/// Apply `edits` then submit. Returns whether the snapshot was committed.
pub fn execute(config_path: &Path, object_path: Option<&Path>, edits: &[String]) -> Result<bool> {
    let config = load_configuration(config_path)?;
    let object = load_object(object_path, &config)?;

    let (state, outcome) = run(&config, object, edits)?;

    match outcome {
        SubmitOutcome::Committed => {
            eprintln!("{}", "Saved".green().bold());
            if let Some(snapshot) = state.saved() {
                println!("{}", serde_json::to_string_pretty(snapshot)?);
            }
            Ok(true)
        }
        SubmitOutcome::Rejected { failures } => {
            eprintln!(
                "{} {} field(s) failed validation",
                "Not saved:".red().bold(),
                failures.len()
            );
            for failure in &failures {
                eprintln!(
                    "  {} ({}): {}",
                    failure.label.bold(),
                    failure.path.to_string().cyan(),
                    failure.message.yellow()
                );
            }
            Ok(false)
        }
    }
}

/// Edits are applied one at a time, each through the field that owns its path
pub fn run(
    config: &FormConfiguration,
    object: Value,
    edits: &[String],
) -> Result<(FormState, SubmitOutcome)> {
    let mut state = FormState::for_configuration(object, config);

    for raw in edits {
        let (path, value) = parse_edit(raw)?;
        match config.owner_of(&path) {
            Some(field) => {
                state.edit(&path, field, value);
            }
            None => warn!("No field is bound to '{}', edit skipped", path),
        }
    }

    let outcome = state.submit(config);
    Ok((state, outcome))
}
