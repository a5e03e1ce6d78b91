//! Error types for the coub-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Authorization errors
    #[error("Could not open browser for {url}: {message}")]
    BrowserOpen { url: String, message: String },

    #[error("Could not start callback listener on {addr}: {source}")]
    AuthBind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No authorization callback received within {0} seconds")]
    AuthTimeout(u64),

    #[error("Token exchange failed: {0}")]
    AuthExchange(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to determine number of liked coubs: {0}")]
    Probe(String),

    #[error("Failed to fetch page {page} of liked coubs: {message}")]
    PageFetch { page: u32, message: String },

    // Download errors
    #[error("Failed to download '{url}': {message}")]
    AssetFetch { url: String, message: String },

    // File system errors
    #[error("File system error at '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Build a file system error for the given path.
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
