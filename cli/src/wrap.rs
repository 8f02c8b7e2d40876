#![deny(missing_docs)]

//! # Wrap Command
//!
//! Best-effort batch driver that wraps success-response schemas across the
//! generated domain specifications.
//!
//! For each registered filename the driver reads `<spec-dir>/<file>`, parses
//! the YAML into the in-memory document tree, applies the envelope walker,
//! and rewrites the file. A failing file is reported and skipped; the batch
//! always runs to completion.

use cde_core::{
    missing_envelope_schemas, parse_document, render_document, wrap_document, AppResult,
    DomainRegistry, EnvelopeNames,
};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Maximum length of a reported per-file error message.
const ERROR_PREVIEW_CHARS: usize = 60;

/// Arguments for the wrap command.
#[derive(clap::Args, Debug, Clone)]
pub struct WrapArgs {
    /// Directory holding the generated specification files.
    #[clap(long, default_value = "openapi")]
    pub spec_dir: PathBuf,

    /// Report wrap counts without writing any file back.
    #[clap(long)]
    pub dry_run: bool,

    /// Restrict the run to these registered filenames (repeatable).
    #[clap(long)]
    pub only: Vec<String>,
}

/// Outcome of one file in the batch.
#[derive(Debug)]
pub struct FileReport {
    /// Registered specification filename.
    pub filename: String,
    /// Wrapped-response count, or the failure that skipped the file.
    pub outcome: AppResult<usize>,
}

/// Executes the wrap batch over the registry.
///
/// Per-file failures are collected and reported; they never abort the batch
/// and never produce a non-zero exit.
pub fn execute(args: &WrapArgs, registry: &DomainRegistry) -> AppResult<()> {
    for name in &args.only {
        if !registry.contains(name) {
            eprintln!("Warning: --only {} is not a registered specification", name);
        }
    }

    let reports = run_batch(args, registry);

    report_unregistered_specs(&args.spec_dir, registry);

    let succeeded = reports.iter().filter(|r| r.outcome.is_ok()).count();
    println!(
        "Wrap batch finished: {} succeeded, {} failed.",
        succeeded,
        reports.len() - succeeded
    );

    Ok(())
}

/// Runs the batch and collects per-file outcomes without early termination.
fn run_batch(args: &WrapArgs, registry: &DomainRegistry) -> Vec<FileReport> {
    let mut reports = Vec::new();

    for (filename, names) in registry.iter() {
        if !args.only.is_empty() && !args.only.iter().any(|only| only == filename) {
            continue;
        }

        println!("Processing {}...", filename);
        let path = args.spec_dir.join(filename);
        let outcome = process_spec_file(&path, names, args.dry_run);
        match &outcome {
            Ok(count) => println!("  Wrapped {} responses", count),
            Err(e) => eprintln!("  Failed: {}", truncate_message(&e.to_string())),
        }

        reports.push(FileReport {
            filename: filename.to_string(),
            outcome,
        });
    }

    reports
}

/// Transforms one specification file in place.
///
/// The file is only written after the whole in-memory transform succeeds, so
/// a parse or render failure never leaves a partial write behind.
fn process_spec_file(path: &Path, names: &EnvelopeNames, dry_run: bool) -> AppResult<usize> {
    let content = fs::read_to_string(path)?;
    let mut doc = parse_document(&content)?;

    let wrapped = wrap_document(&mut doc, names);

    for schema in missing_envelope_schemas(&doc, names) {
        eprintln!(
            "  Warning: envelope schema '{}' is not defined in components.schemas",
            schema
        );
    }

    if !dry_run {
        let rendered = render_document(&doc)?;
        fs::write(path, rendered)?;
    }

    Ok(wrapped)
}

/// Lists YAML files in the spec directory that no registry entry covers.
///
/// Unregistered files are never processed; naming them keeps a renamed or
/// newly added domain specification from being silently skipped forever.
fn report_unregistered_specs(spec_dir: &Path, registry: &DomainRegistry) {
    if !spec_dir.is_dir() {
        return;
    }

    let walker = WalkDir::new(spec_dir).max_depth(1).into_iter();
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
        {
            continue;
        }
        let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !registry.contains(filename) {
            println!("Skipping unregistered specification {}", filename);
        }
    }
}

/// Truncates an error message for the per-file report line.
fn truncate_message(message: &str) -> String {
    if message.chars().count() <= ERROR_PREVIEW_CHARS {
        return message.to_string();
    }
    let preview: String = message.chars().take(ERROR_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}
