//! Conversion of API responses into favorite items.

use crate::api::types::{CoubResponse, RemoteFile};
use crate::media::item::{Asset, AssetSet, FavoriteItem, Tag};

/// Convert a timeline coub into a [`FavoriteItem`].
///
/// Empty URLs become absent assets and a zero size becomes an unknown size.
pub fn parse_coub(coub: &CoubResponse) -> FavoriteItem {
    let versions = &coub.file_versions;

    let preview = versions
        .share
        .default
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| Asset {
            url: url.to_string(),
            expected_size: None,
        });

    FavoriteItem {
        id: coub.id,
        permalink: coub.permalink.clone(),
        title: coub.title.clone(),
        tags: coub
            .tags
            .iter()
            .map(|tag| Tag {
                title: tag.title.clone(),
            })
            .collect(),
        assets: AssetSet {
            preview,
            video: remote_asset(&versions.html5.video.higher),
            audio: remote_asset(&versions.html5.audio.high),
        },
    }
}

/// Convert a whole page, keeping the API order.
pub fn parse_coubs(coubs: &[CoubResponse]) -> Vec<FavoriteItem> {
    coubs.iter().map(parse_coub).collect()
}

fn remote_asset(file: &RemoteFile) -> Option<Asset> {
    if file.url.is_empty() {
        return None;
    }

    Some(Asset {
        url: file.url.clone(),
        expected_size: (file.size > 0).then_some(file.size),
    })
}
