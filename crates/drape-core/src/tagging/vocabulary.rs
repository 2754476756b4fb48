//! Allow/deny vocabularies that gate which detected labels become tags.
//!
//! The built-in lists cover common apparel terms (allow) and body parts or
//! generic references to people (deny). A vocabulary directory may extend
//! both with `allowlist.txt` and `blacklist.txt`, one term per line.
//! Vocabularies are built once at startup and only ever read afterwards.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{InputError, InputResult};

/// Apparel and fashion-attribute terms. Labels containing any of these are kept.
pub const ALLOWLIST: &[&str] = &[
    // General
    "clothing",
    "apparel",
    "garment",
    "fashion",
    "textile",
    "fabric",
    "outerwear",
    "underwear",
    "sportswear",
    "streetwear",
    // Tops
    "shirt",
    "t-shirt",
    "tee",
    "polo",
    "blouse",
    "top",
    "tank top",
    // Dresses and skirts
    "dress",
    "gown",
    "skirt",
    // Bottoms
    "pants",
    "trousers",
    "jeans",
    "denim",
    "shorts",
    "leggings",
    "sweatpants",
    // Outerwear
    "jacket",
    "coat",
    "hoodie",
    "sweatshirt",
    "cardigan",
    "blazer",
    "parka",
    "windbreaker",
    // Knitwear
    "sweater",
    "jumper",
    // Footwear
    "sneakers",
    "shoes",
    "boots",
    "sandals",
    "heels",
    "flip-flops",
    "slippers",
    // Headwear
    "hat",
    "cap",
    "beanie",
    "bucket hat",
    "beret",
    "visor",
    // Accessories
    "scarf",
    "gloves",
    "socks",
    "belt",
    "tie",
    // Bags
    "bag",
    "handbag",
    "backpack",
    "tote",
    "wallet",
    // Patterns
    "pattern",
    "plaid",
    "striped",
    "stripe",
    "floral",
    "polka dot",
    "graphic",
    "logo",
    "solid",
    // Styles and fits
    "vintage",
    "casual",
    "formal",
    "athletic",
    "sport",
    "street",
    "retro",
    "minimalist",
    "boho",
    "chic",
    "classic",
    "oversized",
    "slim fit",
    "regular fit",
];

/// Body parts and generic people references. Labels equal to one of these are dropped.
pub const BLACKLIST: &[&str] = &[
    "beard",
    "hair",
    "facial hair",
    "mustache",
    "moustache",
    "eyebrow",
    "eyelash",
    "shoulder",
    "arm",
    "hand",
    "face",
    "forehead",
    "person",
    "man",
    "woman",
    "boy",
    "girl",
    "adult",
    "people",
    "human",
    "portrait",
    "skin",
];

/// File names read from a vocabulary directory.
const ALLOWLIST_FILE: &str = "allowlist.txt";
const BLACKLIST_FILE: &str = "blacklist.txt";

static BUILTIN: OnceLock<Vocabulary> = OnceLock::new();

/// An immutable pair of allow and deny term sets, all lowercase.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    allowlist: BTreeSet<String>,
    blacklist: BTreeSet<String>,
}

impl Vocabulary {
    /// The built-in vocabulary, constructed on first use and shared process-wide.
    pub fn builtin() -> &'static Vocabulary {
        BUILTIN.get_or_init(|| {
            Self::from_terms(ALLOWLIST.iter().copied(), BLACKLIST.iter().copied())
        })
    }

    /// Build a vocabulary from arbitrary term lists.
    ///
    /// Terms are trimmed and lowercased; blank terms are ignored.
    pub fn from_terms<'a>(
        allow: impl IntoIterator<Item = &'a str>,
        block: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            allowlist: normalize(allow),
            blacklist: normalize(block),
        }
    }

    /// Load the built-in vocabulary extended with terms from `vocab_dir`.
    ///
    /// Reads `allowlist.txt` and `blacklist.txt` if present. Lines starting
    /// with `#` are comments. Returns an error only on I/O failures, not on
    /// missing files.
    pub fn load(vocab_dir: &Path) -> InputResult<Self> {
        let mut vocabulary = Self::builtin().clone();

        let extra_allow = read_terms(&vocab_dir.join(ALLOWLIST_FILE))?;
        let extra_block = read_terms(&vocab_dir.join(BLACKLIST_FILE))?;
        vocabulary.allowlist.extend(normalize(extra_allow.iter().map(String::as_str)));
        vocabulary.blacklist.extend(normalize(extra_block.iter().map(String::as_str)));

        let overlap = vocabulary.overlap();
        if !overlap.is_empty() {
            tracing::warn!(
                "Terms present in both allowlist and blacklist (blacklist wins): {}",
                overlap.join(", ")
            );
        }

        tracing::info!(
            "Loaded vocabulary: {} allowed, {} blocked ({} + {} from {:?})",
            vocabulary.allowlist.len(),
            vocabulary.blacklist.len(),
            extra_allow.len(),
            extra_block.len(),
            vocab_dir,
        );

        Ok(vocabulary)
    }

    /// Whether `text` exactly equals a blacklisted term. Expects lowercase input.
    pub fn is_blocked(&self, text: &str) -> bool {
        self.blacklist.contains(text)
    }

    /// The first allowlist term that `text` equals or contains. Expects lowercase input.
    ///
    /// Linear scan; the allowlist is small and fixed.
    pub fn allowed_by(&self, text: &str) -> Option<&str> {
        self.allowlist
            .iter()
            .find(|term| text.contains(term.as_str()))
            .map(String::as_str)
    }

    /// Whether `text` equals or contains any allowlist term.
    pub fn allows(&self, text: &str) -> bool {
        self.allowed_by(text).is_some()
    }

    /// Allowlist terms in sorted order.
    pub fn allowlist(&self) -> impl Iterator<Item = &str> {
        self.allowlist.iter().map(String::as_str)
    }

    /// Blacklist terms in sorted order.
    pub fn blacklist(&self) -> impl Iterator<Item = &str> {
        self.blacklist.iter().map(String::as_str)
    }

    /// Terms present in both lists.
    pub fn overlap(&self) -> Vec<&str> {
        self.allowlist
            .intersection(&self.blacklist)
            .map(String::as_str)
            .collect()
    }
}

fn normalize<'a>(terms: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn read_terms(path: &Path) -> InputResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| InputError::Vocabulary {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lists_are_disjoint() {
        assert!(Vocabulary::builtin().overlap().is_empty());
    }

    #[test]
    fn test_builtin_terms_are_lowercase() {
        for term in ALLOWLIST.iter().chain(BLACKLIST) {
            assert_eq!(*term, term.to_lowercase(), "{term} is not lowercase");
            assert_eq!(*term, term.trim());
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = Vocabulary::builtin() as *const Vocabulary;
        let b = Vocabulary::builtin() as *const Vocabulary;
        assert_eq!(a, b);
    }

    #[test]
    fn test_allows_exact_and_substring() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.allows("jacket"));
        assert!(vocab.allows("striped jacket"));
        assert!(vocab.allows("red t-shirt"));
        assert!(!vocab.allows("tree"));
    }

    #[test]
    fn test_is_blocked_is_exact() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.is_blocked("beard"));
        assert!(vocab.is_blocked("portrait"));
        assert!(!vocab.is_blocked("bearded"));
        assert!(!vocab.is_blocked("fashion model"));
    }

    #[test]
    fn test_builtin_term_sample() {
        let vocab = Vocabulary::builtin();
        for term in ["hat", "cap", "bag", "top", "tee", "polo", "textile", "heels", "tie", "vintage"] {
            assert!(vocab.allows(term), "{term} should be allowed");
        }
        for term in ["sleeve", "collar", "pocket", "button", "zipper"] {
            assert!(!vocab.allows(term), "{term} should not be allowed");
        }
        for term in ["mustache", "moustache", "adult", "portrait", "skin"] {
            assert!(vocab.is_blocked(term), "{term} should be blocked");
        }
        for term in ["model", "neck", "leg", "smile"] {
            assert!(!vocab.is_blocked(term), "{term} should not be blocked");
        }
        assert_eq!(vocab.allowlist().count(), 83);
        assert_eq!(vocab.blacklist().count(), 22);
    }

    #[test]
    fn test_from_terms_normalizes() {
        let vocab = Vocabulary::from_terms(["  Parka ", ""], ["ARM"]);
        assert_eq!(vocab.allowlist().collect::<Vec<_>>(), vec!["parka"]);
        assert_eq!(vocab.blacklist().collect::<Vec<_>>(), vec!["arm"]);
    }

    #[test]
    fn test_load_without_files_matches_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = Vocabulary::load(dir.path()).unwrap();
        assert_eq!(
            vocab.allowlist().count(),
            Vocabulary::builtin().allowlist().count()
        );
        assert_eq!(
            vocab.blacklist().count(),
            Vocabulary::builtin().blacklist().count()
        );
    }

    #[test]
    fn test_load_extends_builtin() {
        let dir = tempfile::tempdir().unwrap();

        let mut f = std::fs::File::create(dir.path().join("allowlist.txt")).unwrap();
        writeln!(f, "# Extra apparel").unwrap();
        writeln!(f, "Dungarees").unwrap();
        writeln!(f).unwrap();

        let mut f = std::fs::File::create(dir.path().join("blacklist.txt")).unwrap();
        writeln!(f, "mannequin").unwrap();

        let vocab = Vocabulary::load(dir.path()).unwrap();
        assert!(vocab.allows("blue dungarees"));
        assert!(vocab.allows("jacket"));
        assert!(vocab.is_blocked("mannequin"));
        assert!(vocab.is_blocked("person"));
    }
}
