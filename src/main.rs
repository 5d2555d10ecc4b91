// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the optional config file and resolve input paths
// 3. Read the inputs, run the check, print the report
// 4. Exit with proper code (0 = all indexed, 1 = missing files, 2 = error)
//
// All of the checking itself lives in checker/; this file only does I/O.
// =============================================================================

mod checker;
mod cli;
mod config;
mod error;
mod logger;
mod report;
mod walk;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ExcludeArgs};
use config::{Settings, DEFAULT_REFERENCE};
use std::path::Path;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            // Unreadable input, bad config, etc. Nothing was checked.
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every file is referenced
//   Ok(1) = at least one file is missing
//   Err   = an input could not be read (mapped to exit code 2)
fn run(cli: Cli) -> Result<i32> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            reference,
            manifest,
            exclude,
            json,
        } => {
            let reference = settings.reference(reference.as_deref(), DEFAULT_REFERENCE.into());
            let manifest = settings.manifest(manifest.as_deref());
            handle_check(&settings, &reference, &manifest, &exclude, json)
        }
        Commands::Scan {
            root,
            reference,
            walk,
            exclude,
            json,
        } => {
            // An explicit --reference is relative to ROOT, like the default
            let reference = reference.map(|path| root.join(path));
            let reference = settings.reference(reference.as_deref(), root.join(DEFAULT_REFERENCE));
            handle_scan(&settings, &root, &reference, walk.hidden, &exclude, json)
        }
        Commands::List {
            root,
            walk,
            exclude,
        } => handle_list(&settings, &root, walk.hidden, &exclude),
    }
}

// Handles the 'check' subcommand
fn handle_check(
    settings: &Settings,
    reference: &Path,
    manifest: &Path,
    exclude: &ExcludeArgs,
    json: bool,
) -> Result<i32> {
    info!(reference = %reference.display(), manifest = %manifest.display(), "checking manifest");

    // Both inputs are read completely before anything is checked
    let reference_text = checker::load_reference(reference)?;
    let candidates = checker::load_manifest(manifest)?;

    let policy = settings.policy(&exclude.prefixes, &exclude.names, Some(manifest));
    let report = checker::check_index(&display_name(reference), &reference_text, &candidates, &policy);

    print_report(&report, json)
}

// Handles the 'scan' subcommand
fn handle_scan(
    settings: &Settings,
    root: &Path,
    reference: &Path,
    hidden: bool,
    exclude: &ExcludeArgs,
    json: bool,
) -> Result<i32> {
    info!(root = %root.display(), reference = %reference.display(), "scanning directory");

    let reference_text = checker::load_reference(reference)?;
    let manifest = settings.manifest(None);
    let policy = settings.policy(&exclude.prefixes, &exclude.names, Some(&manifest));
    let candidates = walk::collect_files(root, &policy, hidden)?;

    let report = checker::check_index(&display_name(reference), &reference_text, &candidates, &policy);

    print_report(&report, json)
}

// Handles the 'list' subcommand
//
// Prints the same candidate list scan would check. Always exits 0 on success.
// The manifest is excluded, so `list > atlas_files.txt` never lists itself.
fn handle_list(settings: &Settings, root: &Path, hidden: bool, exclude: &ExcludeArgs) -> Result<i32> {
    let manifest = settings.manifest(None);
    let policy = settings.policy(&exclude.prefixes, &exclude.names, Some(&manifest));
    let candidates = walk::collect_files(root, &policy, hidden)?;

    for path in candidates.iter().filter(|path| !policy.is_excluded(path)) {
        println!("{}", path);
    }

    Ok(0)
}

// Prints the report and turns it into an exit code
fn print_report(outcome: &checker::CheckReport, json: bool) -> Result<i32> {
    if json {
        let output = report::render_json(outcome)?;
        println!("{}", output);
    } else {
        print!("{}", report::render_text(outcome));
    }

    if outcome.is_complete() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// The name used in the "Missing files in ...:" header
fn display_name(reference: &Path) -> String {
    reference
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| reference.display().to_string())
}
