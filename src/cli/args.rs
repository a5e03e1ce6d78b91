//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ExistingFilePolicy};

/// Coub favorites downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "coub-downloader",
    version,
    about = "Download the coubs you liked",
    long_about = "A CLI tool to archive the coubs you liked on coub.com.\n\n\
                  Authorizes through your browser, downloads the looped video, the \
                  full video and the audio track of every liked coub and writes an \
                  index.html to browse them."
)]
pub struct Args {
    /// Destination directory for downloads.
    #[arg(short = 'd', long = "dir")]
    pub download_directory: Option<PathBuf>,

    /// Limit number of coubs to download (0 - no limit).
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// OAuth application ID.
    #[arg(long, env = "COUB_APPLICATION_ID")]
    pub application_id: Option<String>,

    /// OAuth application secret.
    #[arg(long, env = "COUB_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Access token (skips the authorization flow).
    #[arg(long, env = "COUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore the stored token and authorize again.
    #[arg(long)]
    pub reauth: bool,

    /// Local port for the authorization callback.
    #[arg(long)]
    pub callback_port: Option<u16>,

    /// Seconds to wait for the authorization callback.
    #[arg(long)]
    pub callback_timeout: Option<u64>,

    /// What to do with files that already exist.
    #[arg(long, value_enum)]
    pub existing: Option<ExistingFilesArg>,

    /// Don't open the index page when done.
    #[arg(long)]
    pub no_open: bool,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI existing-file policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExistingFilesArg {
    /// Keep any existing file.
    Keep,
    /// Re-download files whose size differs from the advertised one.
    ReplaceMismatched,
}

impl From<ExistingFilesArg> for ExistingFilePolicy {
    fn from(arg: ExistingFilesArg) -> Self {
        match arg {
            ExistingFilesArg::Keep => ExistingFilePolicy::Keep,
            ExistingFilesArg::ReplaceMismatched => ExistingFilePolicy::ReplaceMismatched,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        // Override account settings if provided
        if let Some(application_id) = &self.application_id {
            config.account.application_id = application_id.clone();
        }

        if let Some(secret) = &self.secret {
            config.account.secret = secret.clone();
        }

        if let Some(token) = &self.token {
            config.account.token = token.clone();
        } else if self.reauth {
            config.account.token.clear();
        }

        // Override options if provided
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(limit) = self.limit {
            config.options.limit = limit;
        }

        if let Some(port) = self.callback_port {
            config.options.callback_port = port;
        }

        if let Some(timeout) = self.callback_timeout {
            config.options.callback_timeout_seconds = timeout;
        }

        if let Some(existing) = self.existing {
            config.options.existing_files = existing.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.no_open {
            config.options.open_index = false;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
