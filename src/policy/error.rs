use thiserror::Error;

/// Errors raised while configuring a content check.
///
/// Evaluation itself never fails; only a bad declaration does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Unknown language tag: '{0}'")]
    UnknownLanguage(String),
}
