// src/walk/mod.rs
// =============================================================================
// This module builds the candidate list straight from the filesystem, for
// projects that do not keep a manifest file around.
//
// See files.rs for the traversal rules.
// =============================================================================

mod files;

pub use files::collect_files;
