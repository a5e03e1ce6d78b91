//! Mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with a file that is already present at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExistingFilePolicy {
    /// Any existing file counts as downloaded, whatever its size.
    #[default]
    Keep,
    /// Re-download when the advertised size is known and differs.
    ReplaceMismatched,
}

impl fmt::Display for ExistingFilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExistingFilePolicy::Keep => write!(f, "keep"),
            ExistingFilePolicy::ReplaceMismatched => write!(f, "replace-mismatched"),
        }
    }
}

impl FromStr for ExistingFilePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(ExistingFilePolicy::Keep),
            "replace-mismatched" => Ok(ExistingFilePolicy::ReplaceMismatched),
            _ => Err(format!("Unknown existing-file policy: {}", s)),
        }
    }
}
