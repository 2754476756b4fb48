//! Drape Core - apparel tag derivation.
//!
//! Drape turns the output of an external image-analysis detector (labels with
//! confidence scores, dominant colors with pixel fractions) into a small set of
//! human-readable clothing tags for cataloguing apparel.
//!
//! # Architecture
//!
//! The core is three pure, synchronous steps:
//!
//! ```text
//! labels ─► LabelFilter ──────┐
//!                             ├─► TagMerger ─► { tags }
//! colors ─► ColorClassifier ──┘
//! ```
//!
//! Detection itself, image decoding and result storage happen elsewhere.
//!
//! # Usage
//!
//! ```rust
//! use drape_core::{ColorSample, DetectorResponse, LabelAnnotation, Tagger};
//!
//! let response = DetectorResponse::new(
//!     vec![LabelAnnotation::new("T-Shirt", 0.95), LabelAnnotation::new("Person", 0.9)],
//!     vec![ColorSample::new(255.0, 255.0, 255.0, 0.6)],
//! );
//! let result = Tagger::with_defaults().tag(&response);
//! assert!(result.contains("t-shirt"));
//! assert!(result.contains("white"));
//! assert!(!result.contains("person"));
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod tagging;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, DrapeError, InputError, InputResult, Result};
pub use input::{DiscoveredFile, FileDiscovery, ResponseReader};
pub use output::{OutputFormat, OutputWriter};
pub use tagging::{ColorClassifier, LabelFilter, NamedColor, TagMerger, Tagger, Vocabulary};
pub use types::{ColorSample, DetectorResponse, LabelAnnotation, Rgb, TagSet, TaggingStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
