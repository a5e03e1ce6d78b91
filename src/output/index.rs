//! Static HTML index of the downloaded coubs.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};
use crate::fs::{ensure_dir, index_path};
use crate::media::{AssetKind, FavoriteItem};

const BOOTSTRAP_CSS: &str = "https://stackpath.bootstrapcdn.com/bootstrap/4.4.1/css/bootstrap.min.css";
const BOOTSTRAP_INTEGRITY: &str =
    "sha384-Vkoo8x4CGsO3+Hhxv8T/Q5PaXtkKtu6ug5TOeNV6gBiFeWPGFN9MuhOf23Q9Ifjh";

/// Public page of a coub.
pub fn coub_url(permalink: &str) -> String {
    format!("https://coub.com/view/{}", permalink)
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escape a relative file name for use in a `src` attribute.
fn escape_src(file_name: &str) -> String {
    let encoded: String = file_name
        .chars()
        .map(|c| match c {
            '%' => "%25".to_string(),
            '#' => "%23".to_string(),
            '?' => "%3F".to_string(),
            c => c.to_string(),
        })
        .collect();
    escape_html(&encoded)
}

/// Render the index page for the given items.
pub fn render_index(items: &[FavoriteItem]) -> String {
    let mut html = String::new();

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, shrink-to-fit=no\">\n",
    );
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\" integrity=\"{}\" crossorigin=\"anonymous\">",
        BOOTSTRAP_CSS, BOOTSTRAP_INTEGRITY
    );
    html.push_str("<title>My Favorite Coubs</title>\n</head>\n<body>\n");
    html.push_str("<div class=\"container\">\n");
    html.push_str("<div class=\"row\"><h1>My Favorite Coubs</h1></div>\n");
    let _ = writeln!(
        html,
        "<div class=\"row\"><p class=\"text-muted\">{} coubs, generated {}</p></div>",
        items.len(),
        Local::now().format("%Y-%m-%d %H:%M")
    );
    html.push_str("<div class=\"row\">\n<div class=\"col\">\n");
    html.push_str("<table class=\"table table-striped table-hover table-sm\">\n");
    html.push_str("<thead>\n<tr>\n");
    for column in ["#", "Name", "Tags", "Video"] {
        let _ = writeln!(html, "<th scope=\"col\">{}</th>", column);
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for (position, item) in items.iter().enumerate() {
        html.push_str("<tr>\n");
        let _ = writeln!(html, "<th scope=\"row\">{}</th>", position);
        let _ = writeln!(
            html,
            "<td><a href=\"{}\">{}</a></td>",
            escape_html(&coub_url(&item.permalink)),
            escape_html(&item.title)
        );

        let badges: Vec<String> = item
            .tags
            .iter()
            .map(|tag| {
                format!(
                    "<div class=\"badge badge-primary\">{}</div>",
                    escape_html(&tag.title)
                )
            })
            .collect();
        let _ = writeln!(html, "<td>\n{}\n</td>", badges.join(" "));

        html.push_str("<td>\n");
        if let Some(file_name) = item.file_name(AssetKind::Preview) {
            let mime = mime_guess::from_path(&file_name).first_or_octet_stream();
            let _ = writeln!(
                html,
                "<video width=\"320\" height=\"240\" controls loop><source src=\"./{}\" type=\"{}\"></video>",
                escape_src(&file_name),
                mime.essence_str()
            );
        }
        html.push_str("</td>\n</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</div>\n</div>\n</div>\n</body>\n</html>\n");
    html
}

/// Write `index.html` into the destination directory.
pub async fn write_index(items: &[FavoriteItem], destination: &Path) -> Result<PathBuf> {
    ensure_dir(destination).await?;

    let path = index_path(destination);
    tokio::fs::write(&path, render_index(items))
        .await
        .map_err(|e| Error::fs(&path, e))?;

    tracing::debug!("Wrote index with {} entries to {}", items.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{Asset, AssetSet, Tag};

    fn item(title: &str, permalink: &str, tags: &[&str], preview: Option<&str>) -> FavoriteItem {
        FavoriteItem {
            id: 0,
            permalink: permalink.into(),
            title: title.into(),
            tags: tags.iter().map(|t| Tag { title: t.to_string() }).collect(),
            assets: AssetSet {
                preview: preview.map(|url| Asset {
                    url: url.into(),
                    expected_size: None,
                }),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_rows_in_order() {
        let items = vec![
            item("First", "aaa", &["cats", "funny"], Some("https://cdn/x.mp4")),
            item("Second <3", "bbb", &[], None),
        ];
        let html = render_index(&items);

        let first = html.find("https://coub.com/view/aaa").unwrap();
        let second = html.find("https://coub.com/view/bbb").unwrap();
        assert!(first < second);

        assert!(html.contains("<th scope=\"row\">0</th>"));
        assert!(html.contains("<th scope=\"row\">1</th>"));
        assert!(html.contains("Second &lt;3"));
        assert!(html.contains("<div class=\"badge badge-primary\">cats</div> <div class=\"badge badge-primary\">funny</div>"));
        assert!(html.contains("src=\"./First (aaa).mp4\" type=\"video/mp4\""));
        assert_eq!(html.matches("<video").count(), 1);
    }

    #[test]
    fn test_render_escapes_file_name_in_src() {
        let items = vec![item("50% off? #1", "p", &[], Some("https://cdn/x.mp4"))];
        let html = render_index(&items);
        assert!(html.contains("src=\"./50%25 off%3F %231 (p).mp4\""));
    }

    #[tokio::test]
    async fn test_write_index_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("archive");

        let path = write_index(&[item("Only", "one", &[], None)], &dest)
            .await
            .unwrap();

        assert_eq!(path, dest.join("index.html"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("<!doctype html>"));
        assert!(content.contains("1 coubs"));
    }
}
