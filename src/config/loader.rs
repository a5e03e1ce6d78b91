//! Configuration structures and loading logic.

use crate::config::modes::ExistingFilePolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: Credential,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Application identity and the access token obtained for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// OAuth application ID.
    #[serde(default)]
    pub application_id: String,

    /// OAuth application secret.
    #[serde(default)]
    pub secret: String,

    /// Access token; empty until an authorization succeeded.
    #[serde(default)]
    pub token: String,
}

impl Credential {
    /// Whether a token is stored. A stored token is trusted until a request fails.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether enough is known to run the authorization flow.
    pub fn has_client_identity(&self) -> bool {
        !self.application_id.is_empty() && !self.secret.is_empty()
    }
}

/// Download options configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Maximum number of coubs to download (0 = no limit).
    #[serde(default)]
    pub limit: usize,

    /// Local port receiving the OAuth redirect.
    #[serde(default = "default_callback_port")]
    pub callback_port: u16,

    /// How long to wait for the OAuth redirect.
    #[serde(default = "default_callback_timeout")]
    pub callback_timeout_seconds: u64,

    /// What to do with files that are already present.
    #[serde(default)]
    pub existing_files: ExistingFilePolicy,

    /// Whether to open the index page when done.
    #[serde(default = "default_true")]
    pub open_index: bool,

    /// Whether to show progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            limit: 0,
            callback_port: default_callback_port(),
            callback_timeout_seconds: default_callback_timeout(),
            existing_files: ExistingFilePolicy::default(),
            open_index: true,
            show_progress: true,
        }
    }
}

fn default_callback_port() -> u16 {
    crate::api::auth::DEFAULT_CALLBACK_PORT
}

fn default_callback_timeout() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::fs(path, e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::fs(parent, e))?;
        }
        fs::write(path, content).map_err(|e| Error::fs(path, e))?;
        Ok(())
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the callback wait bound.
    pub fn callback_timeout(&self) -> Duration {
        Duration::from_secs(self.options.callback_timeout_seconds)
    }

    /// Store a freshly obtained token and save to file if path provided.
    pub fn update_token(&mut self, token: String, path: Option<&Path>) -> Result<()> {
        self.account.token = token;

        if let Some(path) = path {
            self.save(path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.options.callback_port, 8080);
        assert_eq!(config.options.existing_files, ExistingFilePolicy::Keep);
        assert!(config.options.open_index);
        assert_eq!(config.download_directory(), PathBuf::from("."));
    }

    #[test]
    fn test_parse_full_file() {
        let content = r#"
            [account]
            application_id = "app"
            secret = "sec"
            token = "tok"

            [options]
            download_directory = "/archive"
            limit = 25
            callback_port = 9000
            callback_timeout_seconds = 60
            existing_files = "replace-mismatched"
            open_index = false
        "#;
        let config: Config = toml::from_str(content).unwrap();

        assert!(config.account.has_token());
        assert!(config.account.has_client_identity());
        assert_eq!(config.options.limit, 25);
        assert_eq!(config.options.callback_port, 9000);
        assert_eq!(config.callback_timeout(), Duration::from_secs(60));
        assert_eq!(
            config.options.existing_files,
            ExistingFilePolicy::ReplaceMismatched
        );
        assert!(!config.options.open_index);
        assert!(config.options.show_progress);
        assert_eq!(config.download_directory(), PathBuf::from("/archive"));
    }

    #[test]
    fn test_save_and_reload_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut config = Config::default();
        config.account.application_id = "app".into();
        config.account.secret = "sec".into();
        config.update_token("new-token".into(), Some(&path)).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.account.token, "new-token");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&missing), Err(Error::Config(_))));
        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[account\nsecret = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(Error::TomlParse(_))));
    }
}
