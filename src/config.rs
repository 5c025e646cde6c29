use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};
use crate::rule::SelectionRule;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub prune: PruneConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the daily-quote SQLite database file.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PruneConfig {
    /// Selection rule used when the CLI does not override it.
    pub rule: SelectionRule,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dailyDB.sqlite"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, from `config.toml` when one is present in
    /// the working directory, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new("config.toml");
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.path",
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into())
            }
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        // Diagnostics go to stderr; stdout carries the reporting lines.
        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_script() {
        let config = Config::default();
        assert_eq!(config.database.path, PathBuf::from("dailyDB.sqlite"));
        assert_eq!(config.prune.rule, SelectionRule::Type2);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "data/dailyDB.sqlite"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.path, PathBuf::from("data/dailyDB.sqlite"));
        assert_eq!(config.prune.rule, SelectionRule::Type2);
    }

    #[test]
    fn rule_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [prune]
            rule = "type1"
            "#,
        )
        .unwrap();
        assert_eq!(config.prune.rule, SelectionRule::Type1);
    }

    #[test]
    fn invalid_logging_format_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            format = "yaml"
            "#,
        )
        .unwrap();
        let result = config.validate();
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("logging.format"), "got: {message}");
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = ""
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_with_no_path_uses_defaults() {
        // Runs from the crate root, which carries no config.toml.
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.prune.rule, SelectionRule::Type2);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = Config::load("/nonexistent/stkprune-config.toml");
        assert!(result.is_err());
    }
}
