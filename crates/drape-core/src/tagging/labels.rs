//! Label filtering: turns raw detector labels into apparel tags.

use std::collections::BTreeSet;

use crate::types::LabelAnnotation;

use super::vocabulary::Vocabulary;

/// Labels scoring below this are ignored. The boundary itself is accepted.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.70;

/// Why a label was not turned into a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Confidence under the threshold (or missing, which reads as 0)
    LowConfidence,
    /// Text empty or whitespace-only after normalization
    Empty,
    /// Text exactly matches a blacklisted term
    Blocked,
    /// Text neither equals nor contains any allowlisted term
    NotApparel,
}

/// Filters labels against a confidence threshold and allow/deny vocabularies.
pub struct LabelFilter<'v> {
    vocabulary: &'v Vocabulary,
    min_confidence: f32,
}

impl<'v> LabelFilter<'v> {
    pub fn new(vocabulary: &'v Vocabulary, min_confidence: f32) -> Self {
        Self {
            vocabulary,
            min_confidence,
        }
    }

    /// Filter using the default threshold.
    pub fn with_defaults(vocabulary: &'v Vocabulary) -> Self {
        Self::new(vocabulary, DEFAULT_MIN_CONFIDENCE)
    }

    /// Decide a single label, returning the normalized tag or the reason it was dropped.
    ///
    /// Text is trimmed as well as lowercased, so `" T-Shirt "` yields `t-shirt`
    /// rather than a tag with surrounding spaces. The blacklist is checked
    /// before the allowlist, so an exact blacklisted term is rejected even when
    /// it contains an allowlisted one.
    pub fn check(&self, label: &LabelAnnotation) -> Result<String, Rejection> {
        if label.confidence.is_nan() || label.confidence < self.min_confidence {
            return Err(Rejection::LowConfidence);
        }

        let text = label.text.trim().to_lowercase();
        if text.is_empty() {
            return Err(Rejection::Empty);
        }
        if self.vocabulary.is_blocked(&text) {
            return Err(Rejection::Blocked);
        }
        if !self.vocabulary.allows(&text) {
            return Err(Rejection::NotApparel);
        }
        Ok(text)
    }

    /// Filter labels into the set of accepted lowercase tags.
    pub fn filter(&self, labels: &[LabelAnnotation]) -> BTreeSet<String> {
        labels
            .iter()
            .filter_map(|label| match self.check(label) {
                Ok(tag) => Some(tag),
                Err(reason) => {
                    tracing::trace!(
                        "Rejected label {:?} ({:.3}): {:?}",
                        label.text,
                        label.confidence,
                        reason
                    );
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(labels: &[(&str, f32)]) -> BTreeSet<String> {
        let labels: Vec<LabelAnnotation> = labels
            .iter()
            .map(|&(text, score)| LabelAnnotation::new(text, score))
            .collect();
        LabelFilter::with_defaults(Vocabulary::builtin()).filter(&labels)
    }

    #[test]
    fn test_body_parts_and_people_are_dropped() {
        let tags = filter(&[("T-Shirt", 0.95), ("Beard", 0.99), ("Person", 0.9)]);
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["t-shirt"]);
    }

    #[test]
    fn test_compound_label_matches_by_substring() {
        let tags = filter(&[("Striped Jacket", 0.8)]);
        assert!(tags.contains("striped jacket"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(filter(&[("Dress", 0.70)]).contains("dress"));
        assert!(filter(&[("Dress", 0.699)]).is_empty());
    }

    #[test]
    fn test_blacklist_wins_over_allowlist_substring() {
        let vocab = Vocabulary::from_terms(["fashion"], ["fashion model"]);
        let filter = LabelFilter::with_defaults(&vocab);
        assert_eq!(
            filter.check(&LabelAnnotation::new("Fashion Model", 0.99)),
            Err(Rejection::Blocked)
        );
        assert_eq!(
            filter.check(&LabelAnnotation::new("Fashion Show", 0.99)),
            Ok("fashion show".to_string())
        );
    }

    #[test]
    fn test_builtin_accepts_fashion_model() {
        // not blacklisted, and contains "fashion"
        assert!(filter(&[("Fashion Model", 0.99)]).contains("fashion model"));
    }

    #[test]
    fn test_builtin_vocabulary_decisions() {
        let tags = filter(&[
            ("Hat", 0.9),
            ("Top", 0.9),
            ("Textile", 0.9),
            ("Polo", 0.9),
            ("Sleeve", 0.9),
            ("Collar", 0.9),
            ("Mustache", 0.9),
            ("Adult", 0.9),
        ]);
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["hat", "polo", "textile", "top"]
        );
    }

    #[test]
    fn test_label_text_is_trimmed() {
        assert!(filter(&[(" T-Shirt ", 0.9)]).contains("t-shirt"));
    }

    #[test]
    fn test_blacklist_requires_exact_match() {
        // contains "hand" but is not equal to it
        assert!(filter(&[("Handbag", 0.9)]).contains("handbag"));
    }

    #[test]
    fn test_confidence_alone_is_not_enough() {
        assert!(filter(&[("Tree", 1.0), ("Sky", 0.99)]).is_empty());
    }

    #[test]
    fn test_missing_text_and_score_never_accepted() {
        assert!(filter(&[("", 0.99), ("   ", 0.99), ("Jeans", 0.0)]).is_empty());
    }

    #[test]
    fn test_nan_confidence_rejected() {
        let vocab = Vocabulary::builtin();
        let filter = LabelFilter::with_defaults(vocab);
        let label = LabelAnnotation::new("Jeans", f32::NAN);
        assert_eq!(filter.check(&label), Err(Rejection::LowConfidence));
    }

    #[test]
    fn test_duplicates_collapse() {
        let tags = filter(&[("Jeans", 0.9), ("JEANS", 0.8), ("jeans", 0.75)]);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_check_reports_reason() {
        let filter = LabelFilter::with_defaults(Vocabulary::builtin());
        assert_eq!(
            filter.check(&LabelAnnotation::new("Skirt", 0.5)),
            Err(Rejection::LowConfidence)
        );
        assert_eq!(
            filter.check(&LabelAnnotation::new("Person", 0.9)),
            Err(Rejection::Blocked)
        );
        assert_eq!(
            filter.check(&LabelAnnotation::new("Sky", 0.9)),
            Err(Rejection::NotApparel)
        );
        assert_eq!(
            filter.check(&LabelAnnotation::new(" Skirt ", 0.9)),
            Ok("skirt".to_string())
        );
    }

    #[test]
    fn test_custom_threshold() {
        let filter = LabelFilter::new(Vocabulary::builtin(), 0.5);
        let tags = filter.filter(&[LabelAnnotation::new("Coat", 0.55)]);
        assert!(tags.contains("coat"));
    }

    #[test]
    fn test_no_empty_tags() {
        let tags = filter(&[("Shirt", 0.9), ("", 0.9), ("\t", 0.9), ("Jeans", 0.9)]);
        assert!(tags.iter().all(|t| !t.trim().is_empty()));
        assert_eq!(tags.len(), 2);
    }
}
