//! Path and directory management.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "settings.toml";

/// Name of the generated index page.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Default location of the settings file.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "coub-downloader", "coub-downloader").ok_or_else(|| {
        Error::Config("Could not determine a configuration directory, use --config".into())
    })?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| Error::fs(path, e))
}

/// Path of the index page inside the destination directory.
pub fn index_path(destination: &Path) -> PathBuf {
    destination.join(INDEX_FILE_NAME)
}
