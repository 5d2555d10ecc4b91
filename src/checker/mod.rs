// src/checker/mod.rs
// =============================================================================
// This module contains all index checking logic.
//
// Submodules:
// - manifest: Reads the candidate path list and normalizes each line
// - policy: Decides which paths are excluded from the check
// - index: Tests each remaining path against the reference text
//
// This file (mod.rs) is the module root - it re-exports the public API so the
// rest of the application can write `checker::check_index()`.
// =============================================================================

mod index;
mod manifest;
mod policy;

pub use index::{check_index, load_reference, CheckReport};
pub use manifest::load_manifest;
pub use policy::{ExclusionPolicy, DEFAULT_EXCLUDED_PREFIXES, TOOL_NAME};
