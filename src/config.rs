// src/config.rs
// =============================================================================
// Resolves where the inputs live and what gets excluded.
//
// Every option comes from, in order of precedence:
// 1. A command-line flag
// 2. The TOML file passed with --config
// 3. A built-in default
//
// Example config file:
//
//   reference = "src/App.jsx"
//   manifest = "atlas_files.txt"
//   exclude_prefixes = ["dist/", "node_modules/", "public/", "coverage/"]
//   exclude_names = ["check_links.py"]
//
// Relative paths in the file are resolved against the file's own directory,
// so the config works no matter where the tool is started from.
// =============================================================================

use crate::checker::{ExclusionPolicy, DEFAULT_EXCLUDED_PREFIXES, TOOL_NAME};
use crate::error::{GuardianError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reference file used when none is configured
pub const DEFAULT_REFERENCE: &str = "src/App.jsx";

/// Manifest file used when none is configured
pub const DEFAULT_MANIFEST: &str = "atlas_files.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub reference: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    /// Replaces the default prefixes when present
    pub exclude_prefixes: Option<Vec<String>>,
    /// Added to the default names
    pub exclude_names: Option<Vec<String>>,
}

impl FileConfig {
    /// Loads a config file, resolving its paths against the file's directory
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GuardianError::read(path, e))?;
        let mut config = Self::from_toml_str(&content).map_err(|source| GuardianError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.reference = config.reference.map(|p| base.join(p));
        config.manifest = config.manifest.map(|p| base.join(p));

        debug!(file = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

// Everything the subcommands need to know beyond their own flags
#[derive(Debug, Clone, Default)]
pub struct Settings {
    file: FileConfig,
    config_path: Option<PathBuf>,
}

impl Settings {
    /// Reads the config file if one was given; no file means all defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Ok(Self {
                file: FileConfig::from_file(path)?,
                config_path: Some(path.to_path_buf()),
            }),
            None => Ok(Self::default()),
        }
    }

    /// Picks the reference file: flag, then config, then `fallback`
    pub fn reference(&self, flag: Option<&Path>, fallback: PathBuf) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.file.reference.clone())
            .unwrap_or(fallback)
    }

    /// Picks the manifest file: flag, then config, then DEFAULT_MANIFEST
    pub fn manifest(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.file.manifest.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }

    // Builds the exclusion policy
    //
    // Names always include the tool itself, the manifest's file name and the
    // config file's name, so none of the
    // tool's own inputs are ever reported as missing.
    pub fn policy(
        &self,
        extra_prefixes: &[String],
        extra_names: &[String],
        manifest: Option<&Path>,
    ) -> ExclusionPolicy {
        let prefixes = self.file.exclude_prefixes.clone().unwrap_or_else(|| {
            DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect()
        });

        let mut policy = ExclusionPolicy::new(prefixes, vec![TOOL_NAME.to_string()]);

        for own_file in [manifest, self.config_path.as_deref()].into_iter().flatten() {
            if let Some(name) = own_file.file_name() {
                policy = policy.with_name(name.to_string_lossy());
            }
        }

        let names = self.file.exclude_names.iter().flatten().chain(extra_names);
        for name in names {
            policy = policy.with_name(name.as_str());
        }
        for prefix in extra_prefixes {
            policy = policy.with_prefix(prefix.as_str());
        }

        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
reference = "src/main.jsx"
manifest = "files.txt"
exclude_prefixes = ["build/"]
exclude_names = ["check_links.py"]
"#,
        )
        .unwrap();
        assert_eq!(config.reference, Some(PathBuf::from("src/main.jsx")));
        assert_eq!(config.manifest, Some(PathBuf::from("files.txt")));
        assert_eq!(config.exclude_prefixes, Some(vec!["build/".to_string()]));
        assert_eq!(config.exclude_names, Some(vec!["check_links.py".to_string()]));
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert_eq!(FileConfig::from_toml_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(FileConfig::from_toml_str("refrence = \"typo.jsx\"").is_err());
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("guardian.toml");
        fs::write(&path, "reference = \"src/App.jsx\"\nmanifest = \"files.txt\"\n").unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.reference, Some(tmp.path().join("src/App.jsx")));
        assert_eq!(config.manifest, Some(tmp.path().join("files.txt")));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("guardian.toml");
        fs::write(&path, "exclude_prefixes = \"not-a-list\"").unwrap();

        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, GuardianError::Config { .. }));
    }

    #[test]
    fn test_flag_beats_config_beats_default() {
        let settings = Settings {
            file: FileConfig {
                reference: Some(PathBuf::from("cfg/App.jsx")),
                ..FileConfig::default()
            },
            config_path: None,
        };

        let fallback = PathBuf::from(DEFAULT_REFERENCE);
        assert_eq!(
            settings.reference(Some(Path::new("flag/App.jsx")), fallback.clone()),
            PathBuf::from("flag/App.jsx")
        );
        assert_eq!(settings.reference(None, fallback.clone()), PathBuf::from("cfg/App.jsx"));
        assert_eq!(Settings::default().reference(None, fallback), PathBuf::from("src/App.jsx"));
        assert_eq!(Settings::default().manifest(None), PathBuf::from("atlas_files.txt"));
    }

    #[test]
    fn test_default_policy_excludes_own_inputs() {
        let settings = Settings {
            file: FileConfig::default(),
            config_path: Some(PathBuf::from("conf/guardian.toml")),
        };
        let policy = settings.policy(&[], &[], Some(Path::new("/tmp/project/atlas_files.txt")));

        assert!(policy.is_excluded("dist/bundle.js"));
        assert!(policy.is_excluded("atlas_files.txt"));
        assert!(policy.is_excluded("guardian.toml"));
        assert!(policy.is_excluded(TOOL_NAME));
    }

    #[test]
    fn test_config_prefixes_replace_defaults_and_flags_append() {
        let settings = Settings {
            file: FileConfig {
                exclude_prefixes: Some(vec!["build/".to_string()]),
                exclude_names: Some(vec!["check_links.py".to_string()]),
                ..FileConfig::default()
            },
            config_path: None,
        };
        let policy = settings.policy(&["coverage/".to_string()], &["notes.txt".to_string()], None);

        assert!(policy.is_excluded("build/out.js"));
        assert!(policy.is_excluded("coverage/lcov.info"));
        assert!(!policy.is_excluded("dist/bundle.js"));
        assert!(policy.is_excluded("check_links.py"));
        assert!(policy.is_excluded("notes.txt"));
    }
}
