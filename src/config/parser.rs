use super::Config;
use super::validator::ConfigValidator;
use crate::error::CompareError;
use crate::output;
use anyhow::{Context, Result};
use std::path::Path;

/// Upper bound for `diff.context_lines`
const MAX_CONTEXT_LINES: usize = 1000;

/// Read, parse and validate a configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not UTF-8, is not valid
/// TOML, or fails validation.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let content = simdutf8::basic::from_utf8(&bytes)
        .map_err(|e| anyhow::anyhow!("Invalid UTF-8 in config file: {e}"))?;

    parse_config_str(content)
}

/// Parse configuration from TOML text, warning about unrecognised fields
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or fails validation.
pub fn parse_config_str(content: &str) -> Result<Config> {
    let document: toml::Value = toml::from_str(content).context("Failed to parse TOML config")?;

    for field in ConfigValidator::new().unknown_fields(&document) {
        output::warning(&format!("Unknown configuration field: {field}"));
    }

    let config: Config = toml::from_str(content).context("Failed to parse TOML config")?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.diff.extensions.is_empty() {
        return Err(CompareError::InvalidConfig("diff.extensions must not be empty".to_string()).into());
    }

    if config.diff.extensions.iter().any(String::is_empty) {
        return Err(CompareError::InvalidConfig(
            "diff.extensions must not contain empty markers".to_string(),
        )
        .into());
    }

    if config.diff.context_lines > MAX_CONTEXT_LINES {
        return Err(CompareError::InvalidConfig(format!(
            "diff.context_lines cannot exceed {MAX_CONTEXT_LINES}"
        ))
        .into());
    }

    Ok(())
}
