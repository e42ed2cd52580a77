//! Per-language banned-word content check.
//!
//! The `policy` module holds the catalog of banned words and the validator
//! that evaluates text against a declared set of languages. `config` loads a
//! check configuration from the environment for the command-line host.

pub mod config;
pub mod policy;
