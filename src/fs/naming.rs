//! Filename generation.

use url::Url;

use crate::media::item::AssetKind;

/// Replacement for path separators found in titles.
const SEPARATOR_REPLACEMENT: char = '-';

/// Make a title usable as a single path segment.
///
/// Every path separator is replaced, everything else is kept as-is.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '/' | '\\' => SEPARATOR_REPLACEMENT,
            c => c,
        })
        .collect()
}

/// Extension (with leading dot) of the file a URL points at, or an empty string.
///
/// The query string and fragment are ignored.
pub fn remote_extension(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let last_segment = path.rsplit('/').next().unwrap_or_default();
    match last_segment.rfind('.') {
        Some(pos) if pos + 1 < last_segment.len() => last_segment[pos..].to_string(),
        _ => String::new(),
    }
}

/// Build the local file name of one asset.
///
/// Format: `{sanitized title} ({permalink}){kind suffix}{extension}`.
pub fn asset_file_name(title: &str, permalink: &str, kind: AssetKind, url: &str) -> String {
    format!(
        "{} ({}){}{}",
        sanitize_title(title),
        permalink,
        kind.file_suffix(),
        remote_extension(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title_replaces_separators() {
        assert_eq!(sanitize_title("AC/DC"), "AC-DC");
        assert_eq!(sanitize_title("a\\b/c"), "a-b-c");
        assert_eq!(sanitize_title("plain: title?"), "plain: title?");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_sanitized_name_is_single_segment() {
        let name = asset_file_name("../../etc/passwd", "p1", AssetKind::Preview, "x.mp4");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
        assert_eq!(std::path::Path::new(&name).components().count(), 1);
    }

    #[test]
    fn test_remote_extension() {
        assert_eq!(remote_extension("https://cdn.example/a/b/file.mp4"), ".mp4");
        assert_eq!(remote_extension("https://cdn.example/file.mp3?sig=1.2"), ".mp3");
        assert_eq!(remote_extension("https://cdn.example/dir.v2/file"), "");
        assert_eq!(remote_extension("https://cdn.example/"), "");
        assert_eq!(remote_extension("relative/clip.webm?x"), ".webm");
        assert_eq!(remote_extension("trailing."), "");
    }

    #[test]
    fn test_asset_file_name_suffixes() {
        let url = "https://cdn.example/clip.mp4";
        assert_eq!(
            asset_file_name("Title", "perm", AssetKind::Preview, url),
            "Title (perm).mp4"
        );
        assert_eq!(
            asset_file_name("Title", "perm", AssetKind::Video, url),
            "Title (perm)_video.mp4"
        );
        assert_eq!(
            asset_file_name("Title", "perm", AssetKind::Audio, "https://cdn.example/a.mp3"),
            "Title (perm)_audio.mp3"
        );
    }

    #[test]
    fn test_same_title_distinct_permalinks() {
        let url = "https://cdn.example/clip.mp4";
        let a = asset_file_name("a/b", "one", AssetKind::Preview, url);
        let b = asset_file_name("a\\b", "two", AssetKind::Preview, url);
        assert_eq!(sanitize_title("a/b"), sanitize_title("a\\b"));
        assert_ne!(a, b);
    }
}
