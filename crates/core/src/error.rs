//! Core error types for kindex operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.
//! Index lookups never fail; errors only come from parsing identities and
//! loading equivalence configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for kindex operations.
#[derive(Debug, Error)]
pub enum Error {
    // I/O errors
    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("YAML parse error: {reason}")]
    YamlParseFailed { reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("unsupported config format for '{path}' (expected .toml, .yaml, .yml or .json)")]
    UnsupportedConfigFormat { path: PathBuf },

    // Identity errors
    #[error("invalid group kind '{value}': {reason}")]
    InvalidGroupKind { value: String, reason: String },

    #[error("invalid equivalence class: {reason}")]
    InvalidEquivalenceClass { reason: String },

    // Generic I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a YAML parse error.
    pub fn yaml_parse_failed(reason: impl Into<String>) -> Self {
        Self::YamlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an unsupported config format error.
    pub fn unsupported_config_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedConfigFormat { path: path.into() }
    }

    /// Create an invalid group kind error.
    pub fn invalid_group_kind(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGroupKind {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid equivalence class error.
    pub fn invalid_equivalence_class(reason: impl Into<String>) -> Self {
        Self::InvalidEquivalenceClass {
            reason: reason.into(),
        }
    }
}
