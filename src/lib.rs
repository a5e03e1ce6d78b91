//! Coub Downloader - archive the coubs you liked.
//!
//! This library provides the pipeline behind the `coub-downloader` binary.
//!
//! # Features
//!
//! - OAuth authorization with a local callback listener
//! - Paginated retrieval of liked coubs with an optional limit
//! - Download of the looped video, the full video and the audio track
//! - Skip-if-present downloads, so interrupted runs can be resumed
//! - Static HTML index of the archive
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use coub_downloader::{download_favorites, fetch_favorites, CoubApi, ExistingFilePolicy};
//! use coub_downloader::output::ProgressReporter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = CoubApi::new("access-token".to_string())?;
//!     let progress = ProgressReporter::hidden();
//!
//!     let items = fetch_favorites(&api, 10, &progress).await?;
//!     download_favorites(&api, &items, Path::new("coubs"), ExistingFilePolicy::Keep, &progress)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{authorize, CoubApi, OAuthConfig};
pub use config::{Config, Credential, ExistingFilePolicy};
pub use download::{download_favorites, fetch_favorites, DownloadState};
pub use error::{Error, Result};
pub use media::{AssetKind, FavoriteItem};
