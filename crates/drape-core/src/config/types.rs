//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

use crate::tagging::labels::DEFAULT_MIN_CONFIDENCE;

/// Label filtering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Minimum detector confidence for a label to be considered (inclusive)
    pub min_confidence: f32,

    /// Directory with `allowlist.txt` / `blacklist.txt` extending the built-in vocabulary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_dir: Option<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            vocabulary_dir: None,
        }
    }
}

/// Dominant color naming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Whether dominant colors contribute tags
    pub enabled: bool,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Detector response input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extensions treated as detector responses when scanning directories
    pub extensions: Vec<String>,

    /// Number of responses tagged concurrently in batch mode
    pub parallel_workers: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["json".to_string()],
            parallel_workers: 4,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
