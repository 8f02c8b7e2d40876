#![deny(missing_docs)]

//! # CDE OpenAPI CLI
//!
//! Command Line Interface for the Clinical Decision Engine OpenAPI tooling.
//!
//! Supported Commands:
//! - `wrap`: wraps generated success-response schemas in the per-domain
//!   envelope composition, across the five platform specifications.

use cde_core::{AppResult, DomainRegistry};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

mod wrap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "CDE OpenAPI Toolchain CLI")]
struct Cli {
    /// Registry override file (YAML mapping filename -> envelope names).
    /// Defaults to the builtin five-domain table.
    #[clap(long, global = true, env = "CDE_ENVELOPE_CONFIG")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wrap success-response schemas in the domain envelopes.
    Wrap(wrap::WrapArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // The registry is loaded once here and injected; commands never reach
    // for ambient configuration.
    let registry = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            DomainRegistry::from_yaml(&content)?
        }
        None => DomainRegistry::builtin(),
    };

    match &cli.command {
        Commands::Wrap(args) => wrap::execute(args, &registry)?,
    }

    Ok(())
}
