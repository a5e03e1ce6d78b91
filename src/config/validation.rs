//! Configuration validation logic.

use crate::config::loader::{Config, Credential};
use crate::error::{Error, Result};

/// Markers of values copied from documentation instead of real ones.
const PLACEHOLDERS: [&str; 4] = ["replaceme", "your_", "your-", "changeme"];

/// Validate the entire configuration.
///
/// Only credential fields that are set are checked; missing ones are
/// resolved later by prompting or by the authorization flow.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credential(&config.account)?;

    if config.options.callback_port == 0 {
        return Err(Error::ConfigValidation {
            field: "callback_port".to_string(),
            message: "Port must be between 1 and 65535".to_string(),
        });
    }

    if config.options.callback_timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "callback_timeout_seconds".to_string(),
            message: "Timeout must be at least one second".to_string(),
        });
    }

    Ok(())
}

/// Validate the credential fields that are present.
pub fn validate_credential(credential: &Credential) -> Result<()> {
    for (field, value) in [
        ("application_id", &credential.application_id),
        ("secret", &credential.secret),
        ("token", &credential.token),
    ] {
        if !value.is_empty() {
            validate_value(field, value)?;
        }
    }

    Ok(())
}

/// Validate a single required credential value.
pub fn validate_value(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    if value.trim() != value {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Value has leading or trailing whitespace".to_string(),
        });
    }

    let lower = value.to_lowercase();
    if PLACEHOLDERS.iter().any(|p| lower.contains(p)) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Value appears to be a placeholder. Please provide your actual one."
                .to_string(),
        });
    }

    Ok(())
}
