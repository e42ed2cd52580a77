//! Language type: the closed set of languages a check can select.

use crate::policy::PolicyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language with its own banned-word list.
///
/// Serialized as its lower-case ISO 639-1 tag (e.g. `"pl"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pl,
    En,
}

impl Language {
    /// Language used when a check declares no languages at all.
    pub const DEFAULT: Language = Language::Pl;

    /// Every supported language, in catalog order.
    pub const ALL: [Language; 2] = [Language::Pl, Language::En];

    /// Create a Language from a tag string.
    ///
    /// Tags are matched case-insensitively after trimming surrounding
    /// whitespace, so `"EN"` and `" en "` both resolve to English.
    ///
    /// # Returns
    /// * `Ok(Language)` if the tag names a supported language
    /// * `Err(PolicyError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, PolicyError> {
        let normalized = code.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == normalized)
            .ok_or_else(|| PolicyError::UnknownLanguage(code.to_string()))
    }

    /// Get the ISO 639-1 tag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Pl => "Polish",
            Language::En => "English",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_polish() {
        let language = Language::from_code("pl").expect("Should succeed");
        assert_eq!(language, Language::Pl);
        assert_eq!(language.name(), "Polish");
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::En);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Language::from_code("EN").unwrap(), Language::En);
        assert_eq!(Language::from_code("Pl").unwrap(), Language::Pl);
    }

    #[test]
    fn test_from_code_trims_whitespace() {
        assert_eq!(Language::from_code("  en ").unwrap(), Language::En);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert_eq!(result, Err(PolicyError::UnknownLanguage("fr".to_string())));
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("   ").is_err());
    }

    #[test]
    fn test_from_str_matches_from_code() {
        let parsed: Language = "pl".parse().unwrap();
        assert_eq!(parsed, Language::Pl);
        assert!("xx".parse::<Language>().is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_polish() {
        assert_eq!(Language::default(), Language::Pl);
        assert_eq!(Language::DEFAULT, Language::Pl);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(format!("{}", Language::Pl), "pl");
    }

    #[test]
    fn test_code_roundtrips_through_from_code() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&Language::En).unwrap();
        assert_eq!(json, "\"en\"");

        let parsed: Vec<Language> = serde_json::from_str(r#"["pl", "en"]"#).unwrap();
        assert_eq!(parsed, vec![Language::Pl, Language::En]);
    }

    #[test]
    fn test_serde_rejects_unknown_tag() {
        let result: Result<Language, _> = serde_json::from_str("\"fr\"");
        assert!(result.is_err());
    }
}
