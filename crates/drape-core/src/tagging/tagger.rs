//! The tagging entry point: detector response in, tag set out.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{InputResult, Result};
use crate::types::{DetectorResponse, TagSet};

use super::colors::ColorClassifier;
use super::labels::{LabelFilter, DEFAULT_MIN_CONFIDENCE};
use super::merge::TagMerger;
use super::vocabulary::Vocabulary;

/// Derives apparel tags from a detector response.
///
/// Cheap to clone; the vocabulary is shared behind an `Arc` and never mutated.
#[derive(Debug, Clone)]
pub struct Tagger {
    vocabulary: Arc<Vocabulary>,
    min_confidence: f32,
    colors_enabled: bool,
}

impl Tagger {
    /// Create a tagger with an explicit vocabulary and threshold.
    pub fn new(vocabulary: Arc<Vocabulary>, min_confidence: f32) -> Self {
        Self {
            vocabulary,
            min_confidence,
            colors_enabled: true,
        }
    }

    /// Create a tagger with the built-in vocabulary and default threshold.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(Vocabulary::builtin().clone()),
            DEFAULT_MIN_CONFIDENCE,
        )
    }

    /// Create a tagger from configuration, loading any vocabulary extensions.
    pub fn from_config(config: &Config) -> InputResult<Self> {
        let vocabulary = match config.vocabulary_dir() {
            Some(dir) => Vocabulary::load(&dir)?,
            None => Vocabulary::builtin().clone(),
        };
        Ok(Self::new(Arc::new(vocabulary), config.labels.min_confidence)
            .with_colors(config.colors.enabled))
    }

    /// Create a tagger from the configuration file at the default location.
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::from_config(&config)?)
    }

    /// Enable or disable color tags.
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Derive the tag set for one detector response.
    pub fn tag(&self, response: &DetectorResponse) -> TagSet {
        let label_tags =
            LabelFilter::new(&self.vocabulary, self.min_confidence).filter(&response.labels);
        let color_tags = if self.colors_enabled {
            ColorClassifier::classify_dominant(&response.colors)
        } else {
            Default::default()
        };

        tracing::debug!(
            "Tagged response: {}/{} labels accepted, {} color tag(s)",
            label_tags.len(),
            response.labels.len(),
            color_tags.len()
        );

        TagSet::new(TagMerger::merge(label_tags, color_tags))
    }

    /// Parse a JSON detector response and tag it.
    pub fn tag_json(&self, json: &str) -> serde_json::Result<TagSet> {
        let response = DetectorResponse::from_json(json)?;
        Ok(self.tag(&response))
    }

    /// The vocabulary this tagger filters labels with.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::with_defaults()
    }
}
