//! Apparel tag derivation from detector labels and dominant colors.
//!
//! Labels are filtered against allow/deny vocabularies, the two most dominant
//! colors are named, and both results are merged into one tag set.

pub mod colors;
pub mod labels;
pub mod merge;
pub mod tagger;
pub mod vocabulary;

pub use colors::{ColorClassifier, NamedColor};
pub use labels::LabelFilter;
pub use merge::TagMerger;
pub use tagger::Tagger;
pub use vocabulary::Vocabulary;
