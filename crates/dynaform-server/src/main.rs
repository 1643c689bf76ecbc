// File: src/main.rs
// Purpose: Serve one dynaform session: render, per-field edits and submit

mod handlers;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dynaform::{build_empty_object, FormConfiguration, FormRenderer, FormState, Settings};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use handlers::AppState;

#[derive(Parser)]
#[command(name = "dynaform-server", about = "Serve a configuration-driven form")]
struct Args {
    /// Form configuration (JSON array of field descriptors)
    #[arg(short, long)]
    config: PathBuf,

    /// Initial data object (JSON); an empty object is built when omitted
    #[arg(short, long)]
    object: Option<PathBuf>,

    /// Presentation and server settings (TOML)
    #[arg(short, long, default_value = "dynaform.toml")]
    settings: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = Settings::load(&args.settings)?;

    let config_json = fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read configuration: {:?}", args.config))?;
    let config = FormConfiguration::from_json_str(&config_json)
        .with_context(|| format!("Failed to parse configuration: {:?}", args.config))?;

    let object = match args.object.as_deref() {
        Some(path) => load_object(path)?,
        None => build_empty_object(&config),
    };

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = FormState::for_configuration(object, &config);
    let app = handlers::router(Arc::new(AppState::new(
        state,
        config,
        FormRenderer::new(settings),
    )));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Serving form on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn load_object(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data object: {:?}", path))?;
    let object: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data object: {:?}", path))?;
    if !object.is_object() {
        bail!("Data object in {:?} must be a JSON object", path);
    }
    Ok(object)
}
