mod commands;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dynaform")]
#[command(version, about = "Dynaform CLI - configuration-driven forms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the form page as HTML
    Render {
        /// Form configuration (JSON array of field descriptors)
        #[arg(short, long)]
        config: PathBuf,

        /// Initial data object (JSON); an empty object is built when omitted
        #[arg(short, long)]
        object: Option<PathBuf>,

        /// Presentation settings (TOML)
        #[arg(short, long, default_value = "dynaform.toml")]
        settings: PathBuf,

        /// Write the page here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print a fresh data object for a configuration
    Empty {
        /// Form configuration (JSON array of field descriptors)
        #[arg(short, long)]
        config: PathBuf,

        /// Use each field's declared default where present
        #[arg(long)]
        defaults: bool,
    },

    /// Apply edits in order, then submit
    Submit {
        /// Form configuration (JSON array of field descriptors)
        #[arg(short, long)]
        config: PathBuf,

        /// Initial data object (JSON); an empty object is built when omitted
        #[arg(short, long)]
        object: Option<PathBuf>,

        /// One edit as path=value; the value is parsed as JSON, else taken as text
        #[arg(long = "set", value_name = "PATH=VALUE")]
        edits: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            object,
            settings,
            out,
        } => {
            commands::render::execute(&config, object.as_deref(), &settings, out.as_deref())?;
        }
        Commands::Empty { config, defaults } => {
            commands::empty::execute(&config, defaults)?;
        }
        Commands::Submit {
            config,
            object,
            edits,
        } => {
            let committed = commands::submit::execute(&config, object.as_deref(), &edits)?;
            if !committed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
