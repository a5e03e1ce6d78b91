//! Opening URLs and files in the default browser.

use std::path::Path;

use crate::error::{Error, Result};

/// Open a URL in the default browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    webbrowser::open(url).map_err(|e| Error::BrowserOpen {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Open a local file in the default browser.
pub fn open_file_in_browser(path: &Path) -> Result<()> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| Error::fs(path, e))?
            .join(path)
    };
    let url = url::Url::from_file_path(&absolute).map_err(|_| Error::BrowserOpen {
        url: absolute.display().to_string(),
        message: "path cannot be expressed as a file URL".into(),
    })?;
    open_in_browser(url.as_str())
}
