//! File-based settings

use anyhow::Context;
use mbt_sequence::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// `[log]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Contents of the `--config` TOML file
///
/// ```toml
/// [generator]
/// max_paths = 10000
/// default_coverage = 80
///
/// [log]
/// level = "mbt_sequence=debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sequence generator options
    pub generator: GeneratorConfig,
    /// Logging options
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid settings TOML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Fails on malformed TOML or out-of-range values.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbt_sequence::Coverage;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn reads_generator_and_log_tables() {
        let settings = Settings::parse(
            r#"
            [generator]
            start_node = "n1"
            max_paths = 250
            default_coverage = 80

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.generator.start_node, Some("n1".into()));
        assert_eq!(settings.generator.max_paths, Some(250));
        assert_eq!(settings.generator.default_coverage, Coverage::new(80).unwrap());
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.level, "info");
    }

    #[test]
    fn rejects_out_of_range_coverage() {
        assert!(Settings::parse("[generator]\ndefault_coverage = 0\n").is_err());
    }
}
