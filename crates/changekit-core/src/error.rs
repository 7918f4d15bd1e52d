//! Error types for changekit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChangekitError
pub type Result<T> = std::result::Result<T, ChangekitError>;

/// Main error type for changekit operations
#[derive(Debug, Error)]
pub enum ChangekitError {
    /// Command-line usage errors
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Input document errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Output rendering errors
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Usage errors reported before any conversion happens
#[derive(Debug, Error)]
pub enum UsageError {
    /// Input and output point at the same file
    #[error("in-file and out-file must be different: {0}")]
    SamePath(PathBuf),

    /// Input extension has no parser
    #[error("input must be {expected}: {path}")]
    UnsupportedInput { path: PathBuf, expected: String },

    /// Output extension has no formatter
    #[error("output must be {expected}: {path}")]
    UnsupportedOutput { path: PathBuf, expected: String },
}

/// Errors raised while reading a changelog document
#[derive(Debug, Error)]
pub enum ParseError {
    /// Release header is not of the form `<release> (<date>)`
    #[error("could not parse release header at line {line}: {text:?}")]
    InvalidReleaseHeader { line: usize, text: String },

    /// YAML stream does not have the 1 or 4 documents the format defines
    #[error("expected 1 or 4 YAML documents, found {found}")]
    UnexpectedDocumentCount { found: usize },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while rendering a changelog document
#[derive(Debug, Error)]
pub enum FormatError {
    /// A release referenced by an entry has no recorded date
    #[error("no release date recorded for release {0}")]
    MissingReleaseDate(String),

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let err: ChangekitError = UsageError::SamePath(PathBuf::from("CHANGES.rst")).into();
        assert_eq!(
            err.to_string(),
            "in-file and out-file must be different: CHANGES.rst"
        );
    }

    #[test]
    fn test_release_header_error_display() {
        let err = ParseError::InvalidReleaseHeader {
            line: 3,
            text: "4.0".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("\"4.0\""));
    }

    #[test]
    fn test_unsupported_input_display() {
        let err = UsageError::UnsupportedInput {
            path: PathBuf::from("CHANGES.md"),
            expected: ".rst or .yml".to_string(),
        };
        assert_eq!(err.to_string(), "input must be .rst or .yml: CHANGES.md");
    }
}
