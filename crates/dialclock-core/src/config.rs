use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use dialclock_proto::config::*;

use log::{info, warn};
use masterror::Error;
use shellexpand::full;

/// Errors raised while locating or loading the configuration file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The path contains a variable or `~` that could not be expanded.
    #[error("failed to expand config path: {context}")]
    Expand { context: Arc<str> },

    /// An explicitly requested config file does not exist.
    #[error("config file does not exist: {path}")]
    NotFound { path: Arc<str> },

    /// The default config directory could not be created.
    #[error("failed to prepare config directory: {context}")]
    Directory { context: Arc<str> },

    /// The file could not be read.
    #[error("failed to read config file: {context}")]
    Read { context: Arc<str> },

    /// The file is not valid TOML for [`Config`].
    #[error("failed to parse config file: {context}")]
    Parse { context: Arc<str> },

    /// The parsed values are inconsistent.
    #[error("invalid configuration: {reason}")]
    Invalid { reason: ConfigValidationError },
}

impl From<ConfigValidationError> for ConfigError {
    fn from(value: ConfigValidationError) -> Self {
        ConfigError::Invalid { reason: value }
    }
}

/// Locate and load the configuration.
///
/// With an explicit `path` the file must exist. Without one the default
/// location is used and its parent directory is created on demand. An
/// unreadable or unparsable file falls back to defaults; a file that parses
/// but fails validation is an error.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigError> {
    let expanded = match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigError::NotFound {
                    path: Arc::from(expanded.display().to_string()),
                });
            }

            expanded
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if let Some(parent) = expanded.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent).map_err(|err| ConfigError::Directory {
                    context: Arc::from(err.to_string()),
                })?;
            }

            expanded
        }
    };

    let config = if expanded.exists() {
        read_config(&expanded).unwrap_or_else(|err| {
            warn!("{err}, using defaults");
            Config::default()
        })
    } else {
        info!("No config file at {expanded:?}, using defaults");
        Config::default()
    };

    config.validate()?;

    Ok((config, expanded))
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigError::Expand {
        context: Arc::from(err.to_string()),
    })?;

    Ok(PathBuf::from(expanded.to_string()))
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
        context: Arc::from(err.to_string()),
    })?;

    info!("Decoding config file {path:?}");

    let config = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        context: Arc::from(err.to_string()),
    })?;

    info!("Config file loaded successfully");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");

        let err = get_config(Some(path)).expect_err("missing config");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let file = write_config(
            r#"
            [clock]
            hour_hand = "Sweeping"
            "#,
        );

        let (config, path) = get_config(Some(file.path().to_path_buf())).expect("config");
        assert_eq!(config.clock.hour_hand, HourHandMode::Sweeping);
        assert_eq!(path, file.path());
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let file = write_config("this is = = not toml");

        let (config, _) = get_config(Some(file.path().to_path_buf())).expect("config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_config(
            r#"
            [sound]
            volume = 3.0
            "#,
        );

        let err = get_config(Some(file.path().to_path_buf())).expect_err("invalid config");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                reason: ConfigValidationError::VolumeOutOfRange { .. }
            }
        ));
    }

    #[test]
    fn read_config_reports_parse_errors() {
        let file = write_config("[window]\nwidth = \"wide\"");

        let err = read_config(file.path()).expect_err("parse error");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn expand_path_keeps_absolute_paths() {
        let expanded = expand_path(Path::new("/etc/dialclock.toml")).expect("expand");
        assert_eq!(expanded, PathBuf::from("/etc/dialclock.toml"));
    }
}
