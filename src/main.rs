use anyhow::{Context, Result};
use content_policy::config::Config;
use content_policy::policy::{BadWordCatalog, CheckOutcome, Constraint};
use serde::Serialize;
use std::io::{self, BufRead};
use tracing::{info, warn};

/// Result of checking one value, printed as a JSON line.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// Catalog summary printed by `--list`.
#[derive(Debug, Serialize)]
struct LanguageSummary {
    code: &'static str,
    name: &'static str,
    words: usize,
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_policy=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--list") {
        return list_languages();
    }

    // Load configuration from environment
    let config = Config::from_env()?;
    let check = config.check_configuration();
    info!(
        languages = ?check.languages(),
        "Content policy configured"
    );

    let values = if args.is_empty() {
        read_lines(io::stdin().lock()).context("Failed to read values from stdin")?
    } else {
        args
    };

    let mut invalid = 0;
    for value in &values {
        let outcome = check.evaluate(value);
        let report = CheckReport {
            value,
            valid: outcome.is_valid(),
            message: match outcome {
                CheckOutcome::Valid => None,
                CheckOutcome::Invalid { message } => Some(message),
            },
        };

        if !report.valid {
            invalid += 1;
        }
        println!("{}", serde_json::to_string(&report)?);
    }

    if invalid > 0 {
        warn!("{} of {} values rejected", invalid, values.len());
        std::process::exit(1);
    }

    info!("✓ All {} values passed", values.len());
    Ok(())
}

/// Read newline-separated values, replacing invalid UTF-8 instead of failing.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| -> io::Result<String> {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let value = String::from_utf8_lossy(&bytes).into_owned();
            if value.contains(char::REPLACEMENT_CHARACTER) {
                warn!("Input line is not valid UTF-8; checking lossy conversion");
            }
            Ok(value)
        })
        .collect()
}

fn list_languages() -> Result<()> {
    let catalog = BadWordCatalog::get();
    let summary: Vec<LanguageSummary> = catalog
        .languages()
        .map(|language| LanguageSummary {
            code: language.code(),
            name: language.name(),
            words: catalog.words_for(language).len(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
