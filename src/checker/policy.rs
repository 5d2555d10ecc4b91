// src/checker/policy.rs
// =============================================================================
// The exclusion policy decides which candidate paths are never checked.
//
// Two kinds of rules:
// - prefixes: build output and dependencies ("dist/", "node_modules/", ...)
// - names: exact paths such as the manifest file itself
//
// Matching is plain string comparison on the normalized path. A prefix of
// "dist/" excludes "dist/bundle.js" but not "src/dist/bundle.js".
// =============================================================================

/// Prefixes excluded when nothing else is configured
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 3] = ["dist/", "node_modules/", "public/"];

/// The tool's own name, always excluded by default
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    prefixes: Vec<String>,
    names: Vec<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            vec![TOOL_NAME.to_string()],
        )
    }
}

impl ExclusionPolicy {
    pub fn new(prefixes: Vec<String>, names: Vec<String>) -> Self {
        Self { prefixes, names }
    }

    /// Adds a prefix rule (duplicates are ignored)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
        self
    }

    /// Adds an exact-name rule (duplicates are ignored)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    /// True if the path is removed before checking
    pub fn is_excluded(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
            || self.names.iter().any(|name| name == path)
    }

    // True if every file below `dir` would be excluded by a prefix
    //
    // Used by the walker to skip node_modules/ and friends without
    // descending into them. `dir` is relative and has no trailing slash.
    pub fn prunes_dir(&self, dir: &str) -> bool {
        let with_slash = format!("{}/", dir);
        self.prefixes
            .iter()
            .any(|prefix| with_slash.starts_with(prefix.as_str()))
    }
}
