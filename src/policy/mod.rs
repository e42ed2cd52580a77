//! Content policy module: banned-word checks per language.
//!
//! # Architecture
//!
//! - `language`: Closed set of supported languages and their tags
//! - `catalog`: Single source of truth for the banned words of each language
//! - `validator`: Check configuration and evaluation against the catalog
//! - `error`: Configuration errors
//!
//! # Example
//!
//! ```rust
//! use content_policy::policy::{ContentValidator, Language};
//!
//! let config = ContentValidator::configure([Language::En, Language::Pl]);
//! assert!(ContentValidator::is_valid("hello world", &config));
//! assert!(!ContentValidator::is_valid("this is a BadWord example", &config));
//! ```

mod catalog;
mod error;
mod language;
mod validator;

pub use catalog::BadWordCatalog;
pub use error::PolicyError;
pub use language::Language;
pub use validator::{
    CheckConfiguration, CheckOutcome, Constraint, ContentValidator, LanguageSelection, Violation,
    DEFAULT_MESSAGE,
};
