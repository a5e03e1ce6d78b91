//! Favorite item representation.

use std::fmt;

use crate::fs::naming::asset_file_name;

/// Kind of downloadable file attached to a coub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Looped, silent share rendition.
    Preview,
    /// Higher quality video track.
    Video,
    /// Higher quality audio track.
    Audio,
}

impl AssetKind {
    /// Processing order of the asset kinds.
    pub const ALL: [AssetKind; 3] = [AssetKind::Preview, AssetKind::Video, AssetKind::Audio];

    /// Suffix inserted into the file name before the extension.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            AssetKind::Preview => "",
            AssetKind::Video => "_video",
            AssetKind::Audio => "_audio",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Preview => write!(f, "preview"),
            AssetKind::Video => write!(f, "video"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// A remote file belonging to a favorite item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub url: String,
    /// Advertised size in bytes, `None` when the API does not report one.
    pub expected_size: Option<u64>,
}

/// Up to three assets of a favorite item; absent ones are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSet {
    pub preview: Option<Asset>,
    pub video: Option<Asset>,
    pub audio: Option<Asset>,
}

impl AssetSet {
    /// Get the asset of the given kind, if present.
    pub fn get(&self, kind: AssetKind) -> Option<&Asset> {
        match kind {
            AssetKind::Preview => self.preview.as_ref(),
            AssetKind::Video => self.video.as_ref(),
            AssetKind::Audio => self.audio.as_ref(),
        }
    }
}

/// Tag attached to a favorite item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub title: String,
}

/// One liked coub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteItem {
    pub id: u64,
    /// Stable slug, used for disambiguating file names and linking.
    pub permalink: String,
    /// Human title, may contain characters unsafe in paths.
    pub title: String,
    pub tags: Vec<Tag>,
    pub assets: AssetSet,
}

impl FavoriteItem {
    /// Local file name for the given asset kind, if that asset exists.
    pub fn file_name(&self, kind: AssetKind) -> Option<String> {
        self.assets
            .get(kind)
            .map(|asset| asset_file_name(&self.title, &self.permalink, kind, &asset.url))
    }

    /// Compute the download target for the given asset kind.
    pub fn download_target(&self, kind: AssetKind) -> Option<DownloadTarget> {
        let asset = self.assets.get(kind)?;
        Some(DownloadTarget {
            kind,
            file_name: asset_file_name(&self.title, &self.permalink, kind, &asset.url),
            url: asset.url.clone(),
            expected_size: asset.expected_size,
        })
    }
}

/// Where one asset goes on disk and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub kind: AssetKind,
    pub file_name: String,
    pub url: String,
    pub expected_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> FavoriteItem {
        FavoriteItem {
            id: 1,
            permalink: "2abcd".into(),
            title: "AC/DC live".into(),
            tags: vec![],
            assets: AssetSet {
                preview: Some(Asset {
                    url: "https://cdn.example/share/2abcd.mp4".into(),
                    expected_size: None,
                }),
                video: None,
                audio: Some(Asset {
                    url: "https://cdn.example/audio/high.mp3?t=1".into(),
                    expected_size: Some(5000),
                }),
            },
        }
    }

    #[test]
    fn test_asset_kind_order_and_suffix() {
        assert_eq!(
            AssetKind::ALL,
            [AssetKind::Preview, AssetKind::Video, AssetKind::Audio]
        );
        assert_eq!(AssetKind::Preview.file_suffix(), "");
        assert_eq!(AssetKind::Video.file_suffix(), "_video");
        assert_eq!(AssetKind::Audio.file_suffix(), "_audio");
    }

    #[test]
    fn test_download_target() {
        let item = item();

        let preview = item.download_target(AssetKind::Preview).unwrap();
        assert_eq!(preview.file_name, "AC-DC live (2abcd).mp4");
        assert_eq!(preview.expected_size, None);

        let audio = item.download_target(AssetKind::Audio).unwrap();
        assert_eq!(audio.file_name, "AC-DC live (2abcd)_audio.mp3");
        assert_eq!(audio.expected_size, Some(5000));

        assert!(item.download_target(AssetKind::Video).is_none());
        assert!(item.file_name(AssetKind::Video).is_none());
    }
}
