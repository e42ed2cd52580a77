//! Content validation: check configuration and evaluation against the catalog.
//!
//! A check is declared once with the languages it applies to, producing an
//! immutable `CheckConfiguration`. Each value is then evaluated against that
//! configuration: a banned word of ANY selected language makes it invalid.

use crate::policy::{BadWordCatalog, Language, PolicyError};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// Message reported when a value contains a banned word.
pub const DEFAULT_MESSAGE: &str = "Contains bad words";

/// Non-empty set of languages selected for one check.
///
/// Built from any collection of languages; an empty collection falls back to
/// `Language::DEFAULT`. Duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageSelection(BTreeSet<Language>);

impl LanguageSelection {
    /// Create a selection from any collection of languages.
    ///
    /// # Arguments
    /// * `languages` - Languages to select; may be empty or contain duplicates
    ///
    /// # Returns
    /// The deduplicated set, or `{Language::DEFAULT}` if nothing was given.
    pub fn new<I>(languages: I) -> Self
    where
        I: IntoIterator<Item = Language>,
    {
        let mut set: BTreeSet<Language> = languages.into_iter().collect();
        if set.is_empty() {
            set.insert(Language::DEFAULT);
        }
        Self(set)
    }

    /// Parse a selection from language tags (e.g. `["pl", "EN"]`).
    ///
    /// # Returns
    /// * `Ok(LanguageSelection)` if every tag is known (no tags -> default)
    /// * `Err(PolicyError::UnknownLanguage)` for the first unknown tag
    pub fn parse<I, S>(tags: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .map(|tag| Language::from_code(tag.as_ref()))
            .collect::<Result<LanguageSelection, _>>()
    }

    /// Iterate over the selected languages in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.0.iter().copied()
    }

    /// Check if a language is part of the selection.
    pub fn contains(&self, language: Language) -> bool {
        self.0.contains(&language)
    }

    /// Number of distinct selected languages (at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty selection falls back to the default language.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LanguageSelection {
    fn default() -> Self {
        Self::new([])
    }
}

impl FromIterator<Language> for LanguageSelection {
    fn from_iter<T: IntoIterator<Item = Language>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for LanguageSelection {
    type Item = Language;
    type IntoIter = std::collections::btree_set::IntoIter<Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Immutable configuration of one declared check.
///
/// Created once per check site and reused for every value checked there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfiguration {
    languages: LanguageSelection,
    message: Cow<'static, str>,
}

impl CheckConfiguration {
    /// Get the languages this check applies to.
    pub fn languages(&self) -> &LanguageSelection {
        &self.languages
    }

    /// Get the message reported when a value fails this check.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of evaluating one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome<'a> {
    Valid,
    /// The value broke the check; `message` is the configured static text.
    Invalid { message: &'a str },
}

impl CheckOutcome<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckOutcome::Valid)
    }
}

/// A constraint violation reported for a named field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Evaluation hook a host validation framework calls for each value.
///
/// Object safe, so a host can keep heterogeneous checks as
/// `Vec<Box<dyn Constraint>>`.
pub trait Constraint: Send + Sync {
    /// Static message reported when a value breaks the constraint.
    fn message(&self) -> &str;

    /// Whether `value` satisfies the constraint.
    fn is_satisfied(&self, value: &str) -> bool;

    fn evaluate(&self, value: &str) -> CheckOutcome<'_> {
        if self.is_satisfied(value) {
            CheckOutcome::Valid
        } else {
            CheckOutcome::Invalid {
                message: self.message(),
            }
        }
    }

    /// Evaluate `value` and attach the field identity to a failure.
    fn check_field(&self, field: &str, value: &str) -> Result<(), Violation> {
        match self.evaluate(value) {
            CheckOutcome::Valid => Ok(()),
            CheckOutcome::Invalid { message } => Err(Violation {
                field: field.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

impl Constraint for CheckConfiguration {
    fn message(&self) -> &str {
        CheckConfiguration::message(self)
    }

    fn is_satisfied(&self, value: &str) -> bool {
        ContentValidator::is_valid(value, self)
    }
}

/// Validator that checks text against the banned-word catalog.
pub struct ContentValidator;

impl ContentValidator {
    /// Configure a check for the given languages with the default message.
    ///
    /// An empty collection selects `Language::DEFAULT`.
    pub fn configure<I>(languages: I) -> CheckConfiguration
    where
        I: IntoIterator<Item = Language>,
    {
        Self::configure_with_message(languages, DEFAULT_MESSAGE)
    }

    /// Configure a check for the given languages with a custom message.
    pub fn configure_with_message<I, M>(languages: I, message: M) -> CheckConfiguration
    where
        I: IntoIterator<Item = Language>,
        M: Into<Cow<'static, str>>,
    {
        CheckConfiguration {
            languages: LanguageSelection::new(languages),
            message: message.into(),
        }
    }

    /// Configure a check from language tags and a message.
    ///
    /// # Arguments
    /// * `tags` - Language tags such as `"pl"` or `"EN"`; none selects the default
    /// * `message` - Text reported when a value fails the check
    ///
    /// # Returns
    /// * `Ok(CheckConfiguration)` if every tag is known
    /// * `Err(PolicyError::UnknownLanguage)` for the first unknown tag
    pub fn configure_tags<I, S, M>(tags: I, message: M) -> Result<CheckConfiguration, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        M: Into<Cow<'static, str>>,
    {
        let languages = LanguageSelection::parse(tags)?;
        Ok(Self::configure_with_message(languages, message))
    }

    /// Check whether `value` is free of banned words for every configured language.
    ///
    /// # Returns
    /// `false` as soon as any selected language matches, `true` otherwise.
    pub fn is_valid(value: &str, config: &CheckConfiguration) -> bool {
        let catalog = BadWordCatalog::get();

        for language in config.languages.iter() {
            if let Some(word) = catalog.find_match(value, language) {
                debug!(language = %language, word, "Banned word found");
                return false;
            }
        }

        true
    }

    /// Like `is_valid`, treating a missing value as empty (and so valid).
    pub fn is_valid_opt(value: Option<&str>, config: &CheckConfiguration) -> bool {
        value.map_or(true, |value| Self::is_valid(value, config))
    }
}
