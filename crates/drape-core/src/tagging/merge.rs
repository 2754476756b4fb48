//! Combining label and color tags into a single set.

use std::collections::BTreeSet;

/// Unions tag sets, dropping blank entries.
pub struct TagMerger;

impl TagMerger {
    /// Union of both sets with empty and whitespace-only tags removed.
    ///
    /// Output order carries no meaning.
    pub fn merge(label_tags: BTreeSet<String>, color_tags: BTreeSet<String>) -> BTreeSet<String> {
        label_tags
            .into_iter()
            .chain(color_tags)
            .filter(|tag| !tag.trim().is_empty())
            .collect()
    }
}
