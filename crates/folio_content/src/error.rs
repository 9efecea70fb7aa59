use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("command '{name}' in the catalog is invalid: {reason}")]
    InvalidCatalog { name: String, reason: &'static str },

    #[error("project id '{id}' appears more than once")]
    DuplicateProjectId { id: String },

    #[error("project id '{id}' must be a single non-empty token")]
    InvalidProjectId { id: String },

    #[error("skill '{skill}' has proficiency {value}; expected 0..=100")]
    InvalidProficiency { skill: String, value: u8 },
}

impl ContentError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn json(file: &'static str, source: serde_json::Error) -> Self {
        Self::Json { file, source }
    }

    #[must_use]
    pub fn invalid_catalog(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidCatalog {
            name: name.into(),
            reason,
        }
    }
}
