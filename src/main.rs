//! avodoc — convert Avorion script API HTML reference pages to YAML.
//!
//! Two converters share the same pipeline (read page → extract record →
//! render YAML → write `X.yaml` next to `X.html`):
//!
//! - **classes**: every `*.html` page except the site's index/search pages
//! - **callbacks**: `*Callbacks.html` listing pages

mod config;
mod convert;
mod error;
mod extract;
mod model;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use convert::DocKind;

#[derive(Parser)]
#[command(
    name = "avodoc",
    about = "Convert Avorion script API HTML documentation to YAML"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write YAML files to this directory instead of next to the HTML files
    #[arg(short = 'o', long, global = true)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Convert class reference pages
    Classes {
        /// Directory containing the HTML documentation
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Convert *Callbacks.html pages
    Callbacks {
        /// Directory containing the HTML documentation
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Convert class pages, then callback pages
    All {
        /// Directory containing the HTML documentation
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::Config::default().with_output_dir(cli.output);

    match cli.command {
        Command::Classes { dir } => {
            convert::run(DocKind::Classes, &dir, &config)?;
        }
        Command::Callbacks { dir } => {
            convert::run(DocKind::Callbacks, &dir, &config)?;
        }
        Command::All { dir } => {
            // Callback pages also match `*.html`; converting them last
            // leaves the callback YAML in place.
            convert::run(DocKind::Classes, &dir, &config)?;
            println!();
            convert::run(DocKind::Callbacks, &dir, &config)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
