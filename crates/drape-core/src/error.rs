//! Error types for Drape.
//!
//! The tagging core itself never fails: malformed detector data degrades to
//! fewer tags. Errors only come from the edges, loading configuration and
//! reading detector responses or vocabulary files from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Drape operations.
#[derive(Error, Debug)]
pub enum DrapeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input loading errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while loading detector responses or vocabulary files.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be read
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// The file is not a valid detector response
    #[error("Failed to parse detector response {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A vocabulary extension file could not be loaded
    #[error("Vocabulary error for {path}: {message}")]
    Vocabulary { path: PathBuf, message: String },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Convenience type alias for Drape results.
pub type Result<T> = std::result::Result<T, DrapeError>;

/// Convenience type alias for input-loading results.
pub type InputResult<T> = std::result::Result<T, InputError>;
