//! Configuration file for the `versify` command
//!
//! Every section is optional; missing values fall back to defaults and
//! command-line flags take precedence over the file.
//!
//! ```toml
//! [converter]
//! default_system = "english"
//! tables = "custom-tables.toml"
//!
//! [output]
//! format = "json-pretty"
//!
//! [logging]
//! level = "debug"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use versification_core::{OffsetTables, VersificationSystem};

use crate::output::OutputFormat;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "versify.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Directory relative paths in the file are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Explicit path must exist; otherwise `versify.toml` is used when present
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Path of the replacement offset tables, resolved against the config directory
    pub fn tables_path(&self) -> Option<PathBuf> {
        let tables = self.converter.tables.as_ref()?;
        match &self.base_dir {
            Some(dir) if tables.is_relative() => Some(dir.join(tables)),
            _ => Some(tables.clone()),
        }
    }

    /// Replacement tables when configured, `None` for the built-in set
    pub fn load_tables(&self) -> anyhow::Result<Option<OffsetTables>> {
        let Some(path) = self.tables_path() else {
            return Ok(None);
        };
        let tables = OffsetTables::from_file(&path)
            .with_context(|| format!("Failed to load offset tables: {}", path.display()))?;
        tracing::info!(
            "Using offset tables from {} ({} books)",
            path.display(),
            tables.len()
        );
        Ok(Some(tables))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// System assumed for `--abs` when `--system` is omitted
    #[serde(default)]
    pub default_system: VersificationSystem,
    /// TOML file replacing the built-in offset tables
    #[serde(default)]
    pub tables: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(
            config.converter.default_system,
            VersificationSystem::English
        );
        assert_eq!(config.output.format, OutputFormat::Console);
        assert_eq!(config.logging.level, "info");
        assert!(config.tables_path().is_none());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
            [converter]
            default_system = "hebrew"
            tables = "tables/custom.toml"

            [output]
            format = "json-pretty"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.converter.default_system, VersificationSystem::Hebrew);
        assert_eq!(config.output.format, OutputFormat::JsonPretty);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.tables_path(),
            Some(PathBuf::from("tables/custom.toml"))
        );
    }

    #[test]
    fn test_relative_tables_resolve_against_config_dir() {
        let mut config = Config::from_toml_str("[converter]\ntables = \"custom.toml\"").unwrap();
        config.base_dir = Some(PathBuf::from("/etc/versify"));
        assert_eq!(
            config.tables_path(),
            Some(PathBuf::from("/etc/versify/custom.toml"))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Config::from_toml_str("[output]\nformat = \"yaml\"").is_err());
        assert!(Config::from_toml_str("[converter]\ndefault_system = \"latin\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/versify.toml"))).is_err());
    }

    #[test]
    fn test_config_and_tables_from_disk() {
        let dir = std::env::temp_dir().join(format!("versify-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("tables.toml"),
            "[[books]]\nbook = \"Matt\"\nranges = [{ start = \"1:1\", end = \"1:25\", offset = 2 }]\n",
        )
        .unwrap();
        let config_path = dir.join("versify.toml");
        fs::write(&config_path, "[converter]\ntables = \"tables.toml\"\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        let tables = config.load_tables().unwrap().unwrap();
        assert_eq!(tables.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }
}
