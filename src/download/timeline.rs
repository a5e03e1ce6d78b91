//! Liked-timeline pagination.
//!
//! The API's `total_pages` field is probed with one item per page, so its
//! value is the number of reachable items rather than a page count.

use crate::api::{CoubApi, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::media::{parse_coubs, FavoriteItem};
use crate::output::ProgressReporter;

/// Ask the API how many liked coubs are reachable.
pub async fn probe_total(api: &CoubApi) -> Result<usize> {
    let timeline = api
        .get_likes(1, 1)
        .await
        .map_err(|e| Error::Probe(e.to_string()))?;
    Ok(timeline.total_pages as usize)
}

/// Fetch the liked coubs, at most `limit` of them (0 means all).
///
/// Items keep the order the API returns them in. Any failed page aborts the
/// whole fetch; there is no partial result.
pub async fn fetch_favorites(
    api: &CoubApi,
    limit: usize,
    progress: &ProgressReporter,
) -> Result<Vec<FavoriteItem>> {
    let total = probe_total(api).await?;
    let effective_limit = if limit == 0 { total } else { limit };

    tracing::info!(
        "{} liked coubs reachable, fetching up to {}",
        total,
        effective_limit
    );
    progress.set_total(effective_limit as u64);

    // The reported total is not trusted for preallocation.
    let mut items: Vec<FavoriteItem> = Vec::new();
    let mut page = 1u32;

    while items.len() < total && items.len() < effective_limit {
        let timeline = api
            .get_likes(page, PAGE_SIZE)
            .await
            .map_err(|e| Error::PageFetch {
                page,
                message: e.to_string(),
            })?;

        if timeline.coubs.is_empty() {
            tracing::debug!("Page {} is empty, stopping", page);
            break;
        }

        let room = effective_limit - items.len();
        let page_items = parse_coubs(&timeline.coubs);
        let appended = page_items.len().min(room);
        items.extend(page_items.into_iter().take(appended));
        progress.advance(appended as u64);

        tracing::debug!(
            "Page {}: {} coubs, kept {} ({} total)",
            page,
            timeline.coubs.len(),
            appended,
            items.len()
        );
        page += 1;
    }

    Ok(items)
}
