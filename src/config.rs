use crate::policy::{CheckConfiguration, ContentValidator, LanguageSelection, DEFAULT_MESSAGE};
use anyhow::{Context, Result};
use std::env::VarError;

#[derive(Debug, Clone)]
pub struct Config {
    // Languages whose banned words apply
    pub languages: LanguageSelection,

    // Message reported for an invalid value
    pub message: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Comma-separated tags, e.g. "pl,en"; unset or blank selects the default
            languages: parse_languages(optional_var("CONTENT_POLICY_LANGUAGES")?.as_deref())
                .context("Invalid CONTENT_POLICY_LANGUAGES")?,

            message: optional_var("CONTENT_POLICY_MESSAGE")?
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        })
    }

    /// Build the check configuration described by this config.
    pub fn check_configuration(&self) -> CheckConfiguration {
        ContentValidator::configure_with_message(self.languages.clone(), self.message.clone())
    }
}

/// Read an optional variable. Unset is `None`; a non-UTF-8 value is an error.
fn optional_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Invalid {}", name)),
    }
}

/// Parse a comma-separated list of language tags, skipping empty items.
fn parse_languages(raw: Option<&str>) -> Result<LanguageSelection> {
    let tags = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty());

    Ok(LanguageSelection::parse(tags)?)
}
