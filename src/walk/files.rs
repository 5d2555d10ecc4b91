// src/walk/files.rs
// =============================================================================
// This module lists every file under a project root, producing the same
// kind of candidate list a `find . -type f` manifest would.
//
// How it works:
// 1. Walk the root depth-first, sorted by file name so output is stable
// 2. Skip hidden entries (".git", ".env", ...) unless asked not to
// 3. Skip whole directories when every file inside would be excluded anyway
//    (node_modules/ can hold hundreds of thousands of files)
// 4. Return paths relative to the root with "/" separators
//
// Rust concepts:
// - filter_entry: Prunes a directory before walkdir descends into it
// - Closures: Capturing the root and policy by reference
// =============================================================================

use crate::checker::ExclusionPolicy;
use crate::error::{GuardianError, Result};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

// Collects candidate paths by walking `root`
//
// Parameters:
//   root: Directory to walk (usually the project root)
//   policy: Used only to prune excluded directories early; the caller still
//           applies the full policy to the returned list
//   include_hidden: Whether dot-files and dot-directories are listed
//
// Returns: relative paths in walk order. Any unreadable entry aborts the walk.
pub fn collect_files(
    root: &Path,
    policy: &ExclusionPolicy,
    include_hidden: bool,
) -> Result<Vec<String>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| keep_entry(root, entry, policy, include_hidden));

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| GuardianError::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(relative) = relative_path(root, entry.path()) {
            trace!(path = %relative, "found file");
            files.push(relative);
        }
    }

    debug!(root = %root.display(), files = files.len(), "walk finished");

    Ok(files)
}

// Decides whether walkdir should yield (and descend into) an entry
fn keep_entry(root: &Path, entry: &DirEntry, policy: &ExclusionPolicy, include_hidden: bool) -> bool {
    // The root itself is always kept, even when it is "." or a dot-directory
    if entry.depth() == 0 {
        return true;
    }

    if !include_hidden && entry.file_name().to_string_lossy().starts_with('.') {
        return false;
    }

    if entry.file_type().is_dir() {
        if let Some(relative) = relative_path(root, entry.path()) {
            if policy.prunes_dir(&relative) {
                debug!(dir = %relative, "skipping excluded directory");
                return false;
            }
        }
    }

    true
}

// Converts an absolute or root-prefixed path into "a/b/c.md" form
//
// Returns None for the root itself or for paths outside the root.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;

    let parts: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_lists_files_sorted_and_relative() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/App.jsx");
        touch(tmp.path(), "README.md");
        touch(tmp.path(), "docs/b.md");
        touch(tmp.path(), "docs/a.md");

        let files = collect_files(tmp.path(), &ExclusionPolicy::default(), false).unwrap();
        assert_eq!(files, vec!["README.md", "docs/a.md", "docs/b.md", "src/App.jsx"]);
    }

    #[test]
    fn test_skips_hidden_entries_by_default() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".git/HEAD");
        touch(tmp.path(), ".env");
        touch(tmp.path(), "index.md");

        let files = collect_files(tmp.path(), &ExclusionPolicy::default(), false).unwrap();
        assert_eq!(files, vec!["index.md"]);

        let files = collect_files(tmp.path(), &ExclusionPolicy::default(), true).unwrap();
        assert_eq!(files, vec![".env", ".git/HEAD", "index.md"]);
    }

    #[test]
    fn test_prunes_excluded_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "node_modules/react/index.js");
        touch(tmp.path(), "dist/bundle.js");
        touch(tmp.path(), "distribution/notes.md");

        let files = collect_files(tmp.path(), &ExclusionPolicy::default(), false).unwrap();
        assert_eq!(files, vec!["distribution/notes.md"]);
    }

    #[test]
    fn test_missing_root_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = collect_files(&missing, &ExclusionPolicy::default(), false).unwrap_err();
        assert!(matches!(err, GuardianError::Walk { .. }));
    }

    #[test]
    fn test_relative_path_of_root_is_none() {
        let root = Path::new("project");
        assert_eq!(relative_path(root, root), None);
        assert_eq!(
            relative_path(root, &root.join("docs").join("a.md")),
            Some("docs/a.md".to_string())
        );
    }
}
