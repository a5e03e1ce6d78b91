//! Coub Downloader - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, EnvFilter};

use coub_downloader::{
    api::{authorize, CoubApi, OAuthConfig},
    cli::Args,
    config::{prompt_client_identity, validate_config, validate_credential, Config},
    download::{download_favorites, fetch_favorites},
    error::{exit_codes, Error, Result},
    fs::default_config_path,
    output::{
        open_file_in_browser, print_banner, print_config_summary, print_download_stats,
        print_error, print_info, print_success, print_warning, write_index, ProgressReporter,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::AuthBind { .. }
                | Error::AuthTimeout(_)
                | Error::AuthExchange(_)
                | Error::Api(_)
                | Error::Probe(_)
                | Error::PageFetch { .. } => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::AssetFetch { .. } | Error::FileSystem { .. } => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = Config::load_or_default(&config_path)?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let destination = config.download_directory();
    print_config_summary(
        &config_path.display().to_string(),
        config.options.limit,
        &destination.display().to_string(),
    );

    let token = ensure_token(&mut config, &config_path).await?;
    let api = CoubApi::new(token)?;

    // Stage 1: list of liked coubs
    print_info("Downloading coub list from site...");
    let progress = new_progress(&config, "coubs");
    let items = fetch_favorites(&api, config.options.limit, &progress).await?;
    progress.finish();

    // Stage 2: media files
    print_info(&format!(
        "Downloading {} coubs to '{}'...",
        items.len(),
        destination.display()
    ));
    let progress = new_progress(&config, "files");
    let state = download_favorites(
        &api,
        &items,
        &destination,
        config.options.existing_files,
        &progress,
    )
    .await?;
    progress.finish();

    print_download_stats(&state);

    let index = write_index(&items, &destination).await?;
    print_success(&format!("Index written to {}", index.display()));

    if config.options.open_index {
        if let Err(e) = open_file_in_browser(&index) {
            print_warning(&e.to_string());
        }
    }

    Ok(())
}

/// Return a usable access token, authorizing first when none is stored.
async fn ensure_token(config: &mut Config, config_path: &Path) -> Result<String> {
    if config.account.has_token() {
        return Ok(config.account.token.clone());
    }

    if !config.account.has_client_identity() {
        print_info(&format!(
            "No access token found. Register an application on coub.com with redirect URL \
             http://127.0.0.1:{}/callback and enter its credentials.",
            config.options.callback_port
        ));
        prompt_client_identity(&Term::stdout(), &mut config.account)?;
        validate_credential(&config.account)?;
    }

    let oauth = OAuthConfig {
        callback_port: config.options.callback_port,
        callback_timeout: config.callback_timeout(),
        ..OAuthConfig::default()
    };
    let token = authorize(&oauth, &config.account.application_id, &config.account.secret).await?;

    config.update_token(token.clone(), Some(config_path))?;
    print_success(&format!("Authorized, token saved to {}", config_path.display()));

    Ok(token)
}

fn new_progress(config: &Config, label: &str) -> ProgressReporter {
    if config.options.show_progress {
        ProgressReporter::new(label)
    } else {
        ProgressReporter::hidden()
    }
}
