// src/checker/index.rs
// =============================================================================
// This module does the actual check: is every candidate path mentioned in
// the reference text?
//
// "Mentioned" means plain substring containment. We do not parse the
// reference file, so a path inside a comment still counts as found, and
// "a.md" is found inside "data.md". Keep it that way; stricter matching
// would change which files get reported.
// =============================================================================

use super::policy::ExclusionPolicy;
use crate::error::{GuardianError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

// The result of one check run
//
// #[derive(Serialize)] lets main.rs print this as JSON with --json
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Display name of the reference file (e.g. "App.jsx")
    pub reference: String,
    /// Number of candidates that survived the exclusion policy
    pub checked: usize,
    /// Number of candidates removed by the exclusion policy
    pub excluded: usize,
    /// Candidates not found in the reference text, in manifest order
    pub missing: Vec<String>,
}

impl CheckReport {
    /// True when nothing is missing
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

// Returns every candidate that survives the policy and is absent from the text
//
// Pure function: same inputs, same output, order preserved.
pub fn find_missing(
    reference_text: &str,
    candidates: &[String],
    policy: &ExclusionPolicy,
) -> Vec<String> {
    candidates
        .iter()
        .filter(|path| !policy.is_excluded(path))
        .filter(|path| !reference_text.contains(path.as_str()))
        .cloned()
        .collect()
}

// Runs the check and collects the counts needed for the report
pub fn check_index(
    reference_name: &str,
    reference_text: &str,
    candidates: &[String],
    policy: &ExclusionPolicy,
) -> CheckReport {
    let checked = candidates
        .iter()
        .filter(|path| !policy.is_excluded(path))
        .count();
    let missing = find_missing(reference_text, candidates, policy);

    debug!(
        checked,
        excluded = candidates.len() - checked,
        missing = missing.len(),
        "index check finished"
    );

    CheckReport {
        reference: reference_name.to_string(),
        checked,
        excluded: candidates.len() - checked,
        missing,
    }
}

// Reads the whole reference file into memory
pub fn load_reference(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| GuardianError::read(path, e))?;
    debug!(reference = %path.display(), bytes = text.len(), "loaded reference text");
    Ok(text)
}
