//! Error types for snipyaml
//!
//! This module defines all error types used throughout the snipyaml crates,
//! providing descriptive error messages for conversion, configuration and
//! file system operations.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for snipyaml operations
#[derive(Debug, Error)]
pub enum SnipYamlError {
    /// Conversion-related errors
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to snippet file conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Canonical snippet file exists but does not parse
    #[error("Malformed snippet file {path}: {reason}")]
    MalformedSource {
        /// Path of the canonical file
        path: PathBuf,
        /// Message from the underlying parser
        reason: String,
    },

    /// YAML editing file does not parse at write-back time
    #[error("Malformed YAML snippet file {path}: {reason}")]
    MalformedEditing {
        /// Path of the editing file
        path: PathBuf,
        /// Message from the underlying parser
        reason: String,
    },

    /// Failed to serialize a snippet document
    #[error("Failed to serialize snippets: {0}")]
    Serialize(String),

    /// Failed to read a snippet file
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a snippet file
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors related to settings file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration location cannot be determined
    #[error("Configuration directory not found: {0}")]
    NotFound(PathBuf),

    /// Failed to parse the settings file
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// Failed to write the settings file
    #[error("Failed to write settings: {0}")]
    Write(String),
}

/// Result type alias for snipyaml operations
pub type Result<T> = std::result::Result<T, SnipYamlError>;

/// Result type alias for conversion operations
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Result type alias for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
