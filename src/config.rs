use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings read from `spot_finder.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vocabulary file; `.json` or `.toml`.
    pub data_path: PathBuf,
    pub command_prefix: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: PathBuf::from("aion2_data.json"),
            command_prefix: "!".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

pub fn load_config_from_str(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// A missing file yields the defaults; any other failure is an error.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => load_config_from_str(&contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(load_config_from_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = load_config_from_str(
            r#"
            data_path = "data/spots.toml"
            command_prefix = "?"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.data_path, PathBuf::from("data/spots.toml"));
        assert_eq!(cfg.command_prefix, "?");
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = load_config_from_str("command_prefix = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config_from_file(Path::new("/nonexistent/spot_finder.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn reads_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let cfg = load_config_from_file(file.path()).unwrap();
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!(cfg.command_prefix, "!");
    }
}
