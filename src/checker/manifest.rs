// src/checker/manifest.rs
// =============================================================================
// This module reads the manifest: the list of candidate file paths.
//
// A manifest is usually the output of `find . -type f`, so lines look like:
//
//   ./src/App.jsx
//   ./docs/README.md
//
// Each line is trimmed, a leading "./" is removed, and blank lines are
// dropped. Nothing else is normalized: "src//a.md" stays "src//a.md".
// =============================================================================

use crate::error::{GuardianError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

// Normalizes one manifest line
//
// Returns None for lines that are empty after normalization, so callers can
// use it directly with filter_map.
//
// Example:
//   "  ./src/App.jsx \n" -> Some("src/App.jsx")
//   "   "                -> None
pub fn normalize_path(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let path = trimmed.strip_prefix("./").unwrap_or(trimmed);

    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

// Parses manifest text into the ordered candidate list
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(normalize_path)
        .map(String::from)
        .collect()
}

// Reads and parses a manifest file
//
// A missing or unreadable manifest is fatal; there is no fallback.
pub fn load_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| GuardianError::read(path, e))?;
    let candidates = parse_manifest(&content);

    debug!(
        manifest = %path.display(),
        candidates = candidates.len(),
        "loaded manifest"
    );

    Ok(candidates)
}
