//! Download module for content downloading.
//!
//! This module provides:
//! - Liked-timeline pagination
//! - Per-item asset downloading with skip-if-present semantics
//! - Download state tracking

pub mod media;
pub mod state;
pub mod timeline;

pub use media::{download_asset, download_favorites, AssetOutcome};
pub use state::DownloadState;
pub use timeline::{fetch_favorites, probe_total};
