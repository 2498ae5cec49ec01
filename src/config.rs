//! Configuration management for Headsmith

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Categories of disk errors for user-friendly messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskErrorKind {
    /// Disk is full or quota exceeded
    DiskFull,
    /// Permission denied (read or write)
    PermissionDenied,
    /// File or directory not found
    NotFound,
    /// Other IO error
    Other,
}

impl DiskErrorKind {
    /// Get a user-friendly message for this error kind
    pub fn user_message(&self) -> &'static str {
        match self {
            DiskErrorKind::DiskFull => "Disk full - free space needed to save",
            DiskErrorKind::PermissionDenied => "Permission denied writing to ~/.headsmith/",
            DiskErrorKind::NotFound => "File or directory not found",
            DiskErrorKind::Other => "Failed to save data",
        }
    }
}

/// Categorize an IO error into a user-friendly category
pub fn categorize_io_error(e: &std::io::Error) -> DiskErrorKind {
    use std::io::ErrorKind;

    match e.kind() {
        ErrorKind::WriteZero => DiskErrorKind::DiskFull,
        ErrorKind::PermissionDenied => DiskErrorKind::PermissionDenied,
        ErrorKind::NotFound => DiskErrorKind::NotFound,
        _ => {
            #[cfg(unix)]
            {
                if let Some(os_error) = e.raw_os_error() {
                    // ENOSPC = 28, EDQUOT = 122 (Linux) / 69 (macOS)
                    if os_error == 28 || os_error == 122 || os_error == 69 {
                        return DiskErrorKind::DiskFull;
                    }
                    // EACCES
                    if os_error == 13 {
                        return DiskErrorKind::PermissionDenied;
                    }
                }
            }
            DiskErrorKind::Other
        }
    }
}

/// Create a user-friendly error message from an IO error
pub fn friendly_io_error_message(e: &std::io::Error, context: &str) -> String {
    let kind = categorize_io_error(e);
    match kind {
        DiskErrorKind::DiskFull | DiskErrorKind::PermissionDenied => {
            format!("{}: {}", context, kind.user_message())
        }
        DiskErrorKind::NotFound => format!("{}: file or directory not found", context),
        DiskErrorKind::Other => format!("{}: {}", context, e),
    }
}

/// Application configuration
///
/// Covers how rendered headings are delivered, not how they look. Layout
/// settings live in the profile store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Copy every rendered heading to the system clipboard (default: true)
    #[serde(default = "default_true")]
    pub copy_to_clipboard: bool,

    /// Print every rendered heading to the console (default: true)
    #[serde(default = "default_true")]
    pub print_heading: bool,

    /// Log retention in days (default: 7)
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u64,
}

fn default_true() -> bool {
    true
}

fn default_log_retention_days() -> u64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_to_clipboard: default_true(),
            print_heading: default_true(),
            log_retention_days: default_log_retention_days(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the base configuration directory (~/.headsmith)
/// Falls back to ./.headsmith if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".headsmith")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".headsmith"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the profile store
pub fn profiles_file_path() -> PathBuf {
    config_dir().join("profiles.json")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure all required directories exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(config_dir()).context("Failed to create config directory")?;
    std::fs::create_dir_all(logs_dir()).context("Failed to create logs directory")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.copy_to_clipboard);
        assert!(config.print_heading);
        assert_eq!(config.log_retention_days, 7);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.copy_to_clipboard = false;
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let parsed: Config = toml::from_str("print_heading = false\n").unwrap();
        assert!(!parsed.print_heading);
        assert!(parsed.copy_to_clipboard);
        assert_eq!(parsed.log_retention_days, 7);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.log_retention_days = 30;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with(".headsmith"));
    }

    #[test]
    fn test_try_config_dir() {
        // CI might not have a home dir
        if let Some(path) = try_config_dir() {
            assert!(path.ends_with(".headsmith"));
        }
    }

    #[test]
    fn test_file_paths_live_under_config_dir() {
        let base = config_dir();
        assert_eq!(config_file_path(), base.join("config.toml"));
        assert_eq!(profiles_file_path(), base.join("profiles.json"));
        assert_eq!(logs_dir(), base.join("logs"));
    }

    #[test]
    fn test_categorize_io_error() {
        use std::io::{Error, ErrorKind};

        let denied = Error::new(ErrorKind::PermissionDenied, "nope");
        assert_eq!(categorize_io_error(&denied), DiskErrorKind::PermissionDenied);

        let missing = Error::new(ErrorKind::NotFound, "gone");
        assert_eq!(categorize_io_error(&missing), DiskErrorKind::NotFound);

        let other = Error::new(ErrorKind::Other, "odd");
        assert_eq!(categorize_io_error(&other), DiskErrorKind::Other);
    }

    #[test]
    fn test_friendly_io_error_message() {
        use std::io::{Error, ErrorKind};

        let denied = Error::new(ErrorKind::PermissionDenied, "nope");
        assert_eq!(
            friendly_io_error_message(&denied, "Saving profiles"),
            "Saving profiles: Permission denied writing to ~/.headsmith/"
        );

        let other = Error::new(ErrorKind::Other, "odd");
        assert_eq!(friendly_io_error_message(&other, "Export"), "Export: odd");
    }
}
