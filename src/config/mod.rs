//! Configuration module for the coub-downloader.
//!
//! This module handles:
//! - Loading and saving the settings file (credentials and options)
//! - Interactive prompting for missing credentials
//! - Configuration validation

pub mod credentials;
pub mod loader;
pub mod modes;
pub mod validation;

pub use credentials::prompt_client_identity;
pub use loader::{Config, Credential, OptionsConfig};
pub use modes::ExistingFilePolicy;
pub use validation::{validate_config, validate_credential, validate_value};
