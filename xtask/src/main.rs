//! Workspace tasks: options schema export and preset scaffolding.
//!
//! Run with `cargo run -p orthocam-xtask -- <command>`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orthocam::options::Options;

#[derive(Parser)]
#[command(about = "Build tasks for the orthocam workspace")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the options JSON schema.
    Schema {
        /// Output file; defaults to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a preset file holding the default options.
    Preset {
        /// Destination `.toml` path.
        path: PathBuf,
    },
    /// Parse and validate preset files.
    Check {
        /// Preset files to check.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            match out {
                Some(path) => std::fs::write(&path, schema).with_context(
                    || format!("writing {}", path.display()),
                )?,
                #[allow(clippy::print_stdout)]
                None => println!("{schema}"),
            }
        }
        Command::Preset { path } => {
            Options::default()
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Command::Check { paths } => {
            for path in &paths {
                let _ = Options::load(path)
                    .with_context(|| format!("checking {}", path.display()))?;
            }
        }
    }
    Ok(())
}
