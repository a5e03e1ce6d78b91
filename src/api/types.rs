//! API response type definitions.
//!
//! Only the fields this tool reads are modelled; unknown fields are ignored
//! and missing ones fall back to their defaults.

use serde::Deserialize;

/// Response of the liked-timeline endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineResponse {
    #[serde(default)]
    pub page: u32,
    /// Reused by the paginator as the number of reachable items, see
    /// [`crate::download::timeline`].
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub coubs: Vec<CoubResponse>,
}

/// A single coub from the timeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoubResponse {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<TagResponse>,
    #[serde(default)]
    pub file_versions: FileVersions,
}

/// Tag attached to a coub.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagResponse {
    #[serde(default)]
    pub title: String,
}

/// Available renditions of a coub.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileVersions {
    #[serde(default)]
    pub html5: Html5Versions,
    #[serde(default)]
    pub share: ShareVersions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Html5Versions {
    #[serde(default)]
    pub video: Html5Video,
    #[serde(default)]
    pub audio: Html5Audio,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Html5Video {
    #[serde(default)]
    pub higher: RemoteFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Html5Audio {
    #[serde(default)]
    pub high: RemoteFile,
}

/// Looped share rendition (video with the loop baked in, no sound).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareVersions {
    #[serde(default)]
    pub default: Option<String>,
}

/// Remote file location with its advertised size.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteFile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub size: u64,
}

/// Response of the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_ignores_unknown_and_defaults_missing() {
        let json = r#"{
            "page": 1,
            "total_pages": 42,
            "per_page": 1,
            "extra": {"nested": true},
            "coubs": [{
                "id": 7,
                "permalink": "abc12",
                "title": "Cats",
                "views_count": 100,
                "file_versions": {
                    "share": {"default": "https://cdn.example/abc12.mp4"},
                    "html5": {"video": {"higher": {"url": "https://cdn.example/v.mp4", "size": 1024}}}
                }
            }]
        }"#;

        let timeline: TimelineResponse = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.total_pages, 42);
        assert_eq!(timeline.coubs.len(), 1);

        let coub = &timeline.coubs[0];
        assert!(coub.tags.is_empty());
        assert_eq!(coub.file_versions.html5.video.higher.size, 1024);
        assert_eq!(coub.file_versions.html5.audio.high.url, "");
        assert_eq!(coub.file_versions.html5.audio.high.size, 0);
    }

    #[test]
    fn test_share_default_may_be_null() {
        let json = r#"{"file_versions": {"share": {"default": null}}}"#;
        let coub: CoubResponse = serde_json::from_str(json).unwrap();
        assert!(coub.file_versions.share.default.is_none());
    }
}
