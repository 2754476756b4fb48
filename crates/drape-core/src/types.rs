//! Core data types: detector input and tag output.
//!
//! Detector responses are deliberately lenient. Every field is optional, `null`
//! is treated like an absent field, absent numbers read as 0 and absent text
//! reads as empty. Two input shapes are accepted: the flat form
//! (`labels` / `colors`) and the vision-API form (`labelAnnotations` /
//! `imagePropertiesAnnotation.dominantColors.colors`).

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Deserialize a field, mapping JSON `null` to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A detected visual concept and the detector's confidence in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelAnnotation {
    /// Label text as reported by the detector (e.g., "T-Shirt")
    #[serde(default, alias = "description", deserialize_with = "null_as_default")]
    pub text: String,

    /// Confidence score from 0.0 to 1.0
    #[serde(default, alias = "score", deserialize_with = "null_as_default")]
    pub confidence: f32,
}

impl LabelAnnotation {
    /// Create a label annotation.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// An RGB triple with channels in 0..=255.
///
/// Channels are floats because detectors commonly report them that way
/// (`255.0`) and omit zero-valued channels entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    #[serde(default, deserialize_with = "null_as_default")]
    pub red: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub green: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blue: f32,
}

impl Rgb {
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

/// A dominant color region and the share of the image it covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColorSample")]
pub struct ColorSample {
    #[serde(flatten)]
    pub color: Rgb,

    /// Fraction of image pixels in this color, 0.0 to 1.0
    pub pixel_fraction: f32,
}

impl ColorSample {
    /// Create a color sample from channel values and a pixel fraction.
    pub fn new(red: f32, green: f32, blue: f32, pixel_fraction: f32) -> Self {
        Self {
            color: Rgb::new(red, green, blue),
            pixel_fraction,
        }
    }
}

/// Wire form of a color sample: channels either flat or nested under `color`.
#[derive(Deserialize)]
struct RawColorSample {
    #[serde(default, deserialize_with = "null_as_default")]
    red: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    green: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    blue: f32,
    #[serde(default)]
    color: Option<Rgb>,
    #[serde(default, alias = "pixelFraction", deserialize_with = "null_as_default")]
    pixel_fraction: f32,
}

impl From<RawColorSample> for ColorSample {
    fn from(raw: RawColorSample) -> Self {
        Self {
            color: raw
                .color
                .unwrap_or_else(|| Rgb::new(raw.red, raw.green, raw.blue)),
            pixel_fraction: raw.pixel_fraction,
        }
    }
}

/// Everything the external detector reported for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDetectorResponse")]
pub struct DetectorResponse {
    /// Detected labels, in detector order
    pub labels: Vec<LabelAnnotation>,

    /// Dominant colors, in detector order
    pub colors: Vec<ColorSample>,
}

impl DetectorResponse {
    pub fn new(labels: Vec<LabelAnnotation>, colors: Vec<ColorSample>) -> Self {
        Self { labels, colors }
    }

    /// Parse a detector response from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Deserialize)]
struct RawDetectorResponse {
    #[serde(
        default,
        alias = "labelAnnotations",
        deserialize_with = "null_as_default"
    )]
    labels: Vec<LabelAnnotation>,
    #[serde(default, deserialize_with = "null_as_default")]
    colors: Vec<ColorSample>,
    #[serde(default, rename = "imagePropertiesAnnotation")]
    image_properties: Option<RawImageProperties>,
}

#[derive(Deserialize)]
struct RawImageProperties {
    #[serde(default, rename = "dominantColors")]
    dominant_colors: Option<RawDominantColors>,
}

#[derive(Deserialize)]
struct RawDominantColors {
    #[serde(default, deserialize_with = "null_as_default")]
    colors: Vec<ColorSample>,
}

impl From<RawDetectorResponse> for DetectorResponse {
    fn from(raw: RawDetectorResponse) -> Self {
        let mut colors = raw.colors;
        if let Some(dominant) = raw.image_properties.and_then(|p| p.dominant_colors) {
            colors.extend(dominant.colors);
        }
        Self {
            labels: raw.labels,
            colors,
        }
    }
}

/// The derived tags for one detector response.
///
/// Tags form a set. They serialize as a sorted sequence so output is stable,
/// but consumers must not rely on any ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    /// Response file the tags were derived from (batch mode only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<PathBuf>,

    /// Deduplicated, non-empty, lowercase tags
    pub tags: BTreeSet<String>,
}

impl TagSet {
    pub fn new(tags: BTreeSet<String>) -> Self {
        Self { source: None, tags }
    }

    /// Attach the originating file path.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Processing statistics for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaggingStats {
    /// Responses tagged successfully
    pub succeeded: usize,

    /// Responses that could not be read or parsed
    pub failed: usize,

    /// Total tags emitted across all responses
    pub tags_emitted: usize,

    /// Total wall-clock time in seconds
    pub total_seconds: f64,
}
