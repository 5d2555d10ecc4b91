// src/error.rs
// =============================================================================
// Error types shared by the checker, config and walker modules.
//
// There is really only one kind of failure in this tool: an input we could not
// read (a file, the config, or a directory while walking). Each variant keeps
// the path so the message tells the user which input was the problem.
//
// main.rs wraps these in anyhow and maps any of them to exit code 2.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardianError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GuardianError>;

impl GuardianError {
    /// Convenience constructor used wherever we call `fs::read_to_string`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GuardianError::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_path() {
        let err = GuardianError::read(
            "src/App.jsx",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        let message = err.to_string();
        assert!(message.contains("src/App.jsx"));
        assert!(message.contains("No such file or directory"));
    }
}
