//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename generation

pub mod naming;
pub mod paths;

pub use naming::{asset_file_name, remote_extension, sanitize_title};
pub use paths::{default_config_path, ensure_dir, index_path};
