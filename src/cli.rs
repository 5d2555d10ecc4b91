// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Three subcommands share the same exclusion flags:
// - check: compare a manifest file against the reference file
// - scan:  walk a directory instead of reading a manifest
// - list:  print what scan would check, to regenerate a manifest
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "index-guardian",
    version,
    about = "Verify that every project file is referenced from an entry-point source file",
    long_about = "index-guardian checks that each file of a project is mentioned by path somewhere \
                  in one reference file (for example a docs site's src/App.jsx). \
                  Exit code 0 means everything is indexed, 1 means files are missing, \
                  2 means an input could not be read."
)]
pub struct Cli {
    /// TOML file with reference, manifest and exclusion settings
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every path listed in a manifest file
    ///
    /// Example: index-guardian check --manifest atlas_files.txt --reference src/App.jsx
    Check {
        /// File whose text must mention every path (default: src/App.jsx)
        #[arg(long, value_name = "FILE")]
        reference: Option<PathBuf>,

        /// File listing one path per line (default: atlas_files.txt)
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        #[command(flatten)]
        exclude: ExcludeArgs,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Walk a directory and check every file found
    ///
    /// Example: index-guardian scan ./dooz-atlas
    Scan {
        /// Project root to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        /// File whose text must mention every path, relative to ROOT (default: src/App.jsx)
        #[arg(long, value_name = "FILE")]
        reference: Option<PathBuf>,

        #[command(flatten)]
        walk: WalkArgs,

        #[command(flatten)]
        exclude: ExcludeArgs,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the files scan would check, one per line
    ///
    /// Example: index-guardian list > atlas_files.txt
    List {
        /// Project root to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        walk: WalkArgs,

        #[command(flatten)]
        exclude: ExcludeArgs,
    },
}

// Exclusion flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ExcludeArgs {
    /// Also skip paths starting with this prefix (repeatable)
    #[arg(long = "exclude-prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,

    /// Also skip this exact path (repeatable)
    #[arg(long = "exclude-name", value_name = "NAME")]
    pub names: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Include hidden files and directories (names starting with '.')
    #[arg(long)]
    pub hidden: bool,
}
