//! Courier configuration.
//!
//! Loaded from `~/.courier/config.toml`, or the file named by
//! `COURIER_CONFIG`. A missing file means defaults; every key is optional.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Courier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Address that emailed reports are sent to.
    pub report_recipient: String,

    /// Base URL that cloud-delivered reports are uploaded under.
    /// The report type is appended as the last path segment.
    pub cloud_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_recipient: "admin@company.com".to_string(),
            cloud_base_url: "https://cloud.company.com/reports".to_string(),
        }
    }
}

impl Config {
    /// Load config from the configured path, falling back to defaults
    /// when there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `COURIER_CONFIG`, else `~/.courier/config.toml`.
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("COURIER_CONFIG")
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".courier").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "report-recipient = \"ops@example.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.report_recipient, "ops@example.com");
        assert_eq!(config.cloud_base_url, Config::default().cloud_base_url);
    }

    #[test]
    fn full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "report-recipient = \"ops@example.com\"\n\
             cloud-base-url = \"https://files.example.com\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.cloud_base_url, "https://files.example.com");
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "report-recipient = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
