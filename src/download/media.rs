//! Media file downloading.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::CoubApi;
use crate::config::ExistingFilePolicy;
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::fs::ensure_dir;
use crate::media::{AssetKind, DownloadTarget, FavoriteItem};
use crate::output::ProgressReporter;

/// Result of processing one asset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOutcome {
    /// The item has no URL for this kind.
    Missing,
    /// A file was already present and left untouched.
    AlreadyPresent,
    /// The file was fetched in this run.
    Downloaded,
}

/// Download every asset of every item into `destination`.
///
/// Items and asset kinds are processed strictly in order, one request at a
/// time. Progress advances once per asset slot, so three times per item. The
/// first failure aborts the run; files finished before it stay on disk.
pub async fn download_favorites(
    api: &CoubApi,
    items: &[FavoriteItem],
    destination: &Path,
    policy: ExistingFilePolicy,
    progress: &ProgressReporter,
) -> Result<DownloadState> {
    ensure_dir(destination).await?;

    let mut state = DownloadState {
        items: items.len() as u64,
        ..Default::default()
    };
    progress.set_total((items.len() * AssetKind::ALL.len()) as u64);

    for item in items {
        for kind in AssetKind::ALL {
            download_asset(api, item, kind, destination, policy, &mut state).await?;
            progress.advance(1);
        }
    }

    Ok(state)
}

/// Process a single asset slot of an item.
pub async fn download_asset(
    api: &CoubApi,
    item: &FavoriteItem,
    kind: AssetKind,
    destination: &Path,
    policy: ExistingFilePolicy,
    state: &mut DownloadState,
) -> Result<AssetOutcome> {
    let Some(target) = item.download_target(kind) else {
        tracing::debug!("No {} url for coub '{}'", kind, item.title);
        state.missing += 1;
        return Ok(AssetOutcome::Missing);
    };

    let output_path = destination.join(&target.file_name);

    if let Ok(metadata) = tokio::fs::metadata(&output_path).await {
        let mismatch = target
            .expected_size
            .filter(|expected| *expected != metadata.len());

        match (mismatch, policy) {
            (None, _) => {
                tracing::debug!("Skipping existing file: {}", output_path.display());
                state.already_present += 1;
                return Ok(AssetOutcome::AlreadyPresent);
            }
            (Some(expected), ExistingFilePolicy::Keep) => {
                tracing::warn!(
                    "Keeping {} although it has {} bytes instead of {}",
                    output_path.display(),
                    metadata.len(),
                    expected
                );
                state.size_mismatches += 1;
                state.already_present += 1;
                return Ok(AssetOutcome::AlreadyPresent);
            }
            (Some(expected), ExistingFilePolicy::ReplaceMismatched) => {
                tracing::info!(
                    "Replacing {} ({} bytes, expected {})",
                    output_path.display(),
                    metadata.len(),
                    expected
                );
                state.size_mismatches += 1;
                state.replaced += 1;
            }
        }
    }

    let bytes = download_direct(api, &target, &output_path).await?;
    state.record_download(bytes);
    tracing::debug!("Downloaded: {} ({} bytes)", output_path.display(), bytes);

    Ok(AssetOutcome::Downloaded)
}

/// Stream one remote file to disk, returning the number of bytes written.
async fn download_direct(api: &CoubApi, target: &DownloadTarget, output_path: &Path) -> Result<u64> {
    let response = api.download_file(&target.url).await?;

    let mut file = File::create(output_path)
        .await
        .map_err(|e| Error::fs(output_path, e))?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::AssetFetch {
            url: target.url.clone(),
            message: format!("stream error while writing '{}': {}", output_path.display(), e),
        })?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::fs(output_path, e))?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| Error::fs(output_path, e))?;

    Ok(written)
}
