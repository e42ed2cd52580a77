//! Banned-word catalog: single source of truth for every language's word list.
//!
//! The catalog is built once on first access (`OnceLock`) and is read-only
//! thereafter, so it can be shared freely across threads.

use crate::policy::Language;
use std::sync::OnceLock;

/// Banned words of one language, stored lower case, in match order.
#[derive(Debug, Clone)]
struct CatalogEntry {
    language: Language,
    words: &'static [&'static str],
}

/// Global banned-word catalog singleton.
pub struct BadWordCatalog {
    entries: Vec<CatalogEntry>,
}

/// Global catalog instance (initialized lazily)
static CATALOG: OnceLock<BadWordCatalog> = OnceLock::new();

impl BadWordCatalog {
    /// Get the global catalog instance.
    pub fn get() -> &'static BadWordCatalog {
        CATALOG.get_or_init(|| BadWordCatalog {
            entries: default_entries(),
        })
    }

    /// Get the banned words for a language.
    ///
    /// Never fails: a language without an entry has an empty list.
    pub fn words_for(&self, language: Language) -> &[&'static str] {
        self.entries
            .iter()
            .find(|entry| entry.language == language)
            .map(|entry| entry.words)
            .unwrap_or(&[])
    }

    /// Check whether `text` contains any banned word of `language`.
    ///
    /// Matching is a case-insensitive substring search with no word-boundary
    /// handling: "badwords" and "xbadwordx" both match "badword". Empty text
    /// never matches.
    pub fn matches(&self, text: &str, language: Language) -> bool {
        self.find_match(text, language).is_some()
    }

    /// Find the first banned word of `language` contained in `text`.
    ///
    /// # Returns
    /// * `Some(word)` for the first word in catalog order found in the text
    /// * `None` if the text is clean for that language
    pub fn find_match(&self, text: &str, language: Language) -> Option<&'static str> {
        if text.is_empty() {
            return None;
        }

        let lower_case = text.to_lowercase();
        self.words_for(language)
            .iter()
            .copied()
            .find(|word| lower_case.contains(word))
    }

    /// List every catalogued language.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.iter().map(|entry| entry.language)
    }
}

const POLISH_WORDS: &[&str] = &[
    "głupek", "kurka", "cholera", "idiota", "debil", "kretyn", "dupa", "wariat",
];

const ENGLISH_WORDS: &[&str] = &[
    "badword", "damn", "idiot", "stupid", "crap", "moron", "jerk",
];

/// Default catalog entries.
///
/// Words must be non-empty and already lower case; the tests below enforce it.
fn default_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            language: Language::Pl,
            words: POLISH_WORDS,
        },
        CatalogEntry {
            language: Language::En,
            words: ENGLISH_WORDS,
        },
    ]
}
