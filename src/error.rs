use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Errors raised by the pattern examples
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Invalid {kind} type: '{value}' (expected one of: {expected})")]
    UnknownKind {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Nothing to undo: no command has been executed yet")]
    NothingToUndo,

    #[error("Failed to parse {format} data: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl PatternError {
    pub fn unknown_kind(kind: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownKind {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }
}

// =============================================================================
// Errors raised while loading or querying the catalogue
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalogue {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalogue: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate pattern key '{0}'")]
    DuplicateKey(String),

    #[error("Pattern '{0}' has no \"when to use\" notes")]
    EmptyRationale(String),

    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),
}
