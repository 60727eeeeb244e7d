/// HTML index rendering — builds the static index document and writes it.
///
/// The document is assembled as one `String` and written in a single
/// operation, so a failed run never leaves a partially written index (a
/// previous run's file is left untouched if anything fails earlier).
use crate::error::IndexError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the complete index document for an already-sorted list of
/// absolute paths under `root`.
///
/// Each entry becomes `<li><a href="ENCODED">RELATIVE</a></li>` where
/// RELATIVE is the path relative to `root` with `/` separators, and ENCODED
/// is its percent-encoded form.
pub fn render_index(title: &str, root: &Path, paths: &[PathBuf]) -> String {
    let mut html = String::with_capacity(256 + paths.len() * 96);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str("<p>All documents found under this folder, listed in natural order.</p>\n");
    html.push_str("<ul>\n");
    for path in paths {
        let rel = relative_display(root, path);
        let href = encode_href(&rel);
        html.push_str(&format!("<li><a href=\"{href}\">{rel}</a></li>\n"));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

/// Write the rendered document to `output_path`, overwriting any previous
/// index. UTF-8, one write.
pub fn write_index(output_path: &Path, html: &str) -> Result<(), IndexError> {
    std::fs::write(output_path, html).map_err(|source| IndexError::WriteIndex {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", output_path.display(), html.len());
    Ok(())
}

/// Path relative to `root`, with separators normalised to `/` regardless of
/// platform. Falls back to the full path if `path` is not under `root`.
fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.iter()
        .map(|seg| seg.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode each path segment, keeping `/` as the separator so links
/// into subdirectories stay navigable.
fn encode_href(rel: &str) -> String {
    rel.split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_display_strips_root_and_normalises() {
        let root = Path::new("/data/docs");
        let path = PathBuf::from("/data/docs/sub/a.pdf");
        assert_eq!(relative_display(root, &path), "sub/a.pdf");
    }

    #[test]
    fn test_relative_display_keeps_foreign_path() {
        let root = Path::new("/data/docs");
        let path = PathBuf::from("/elsewhere/b.pdf");
        assert_eq!(relative_display(root, &path), "/elsewhere/b.pdf");
    }

    #[test]
    fn test_encode_href_preserves_separators() {
        assert_eq!(encode_href("sub dir/a b.pdf"), "sub%20dir/a%20b.pdf");
        assert_eq!(encode_href("01.pdf"), "01.pdf");
    }

    #[test]
    fn test_render_contains_one_list_with_all_entries() {
        let root = Path::new("/docs");
        let paths = vec![
            PathBuf::from("/docs/01.pdf"),
            PathBuf::from("/docs/02.pdf"),
            PathBuf::from("/docs/10.pdf"),
        ];
        let html = render_index("Document Index", root, &paths);

        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<title>Document Index</title>"));
        assert!(html.contains("<li><a href=\"01.pdf\">01.pdf</a></li>"));

        // Entries appear in the caller's order.
        let p1 = html.find("01.pdf").unwrap();
        let p2 = html.find("02.pdf").unwrap();
        let p3 = html.find("10.pdf").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn test_render_label_is_unencoded() {
        let root = Path::new("/docs");
        let paths = vec![PathBuf::from("/docs/a b.pdf")];
        let html = render_index("Document Index", root, &paths);
        assert!(html.contains("<li><a href=\"a%20b.pdf\">a b.pdf</a></li>"));
    }

    #[test]
    fn test_render_empty_list() {
        let html = render_index("Document Index", Path::new("/docs"), &[]);
        assert!(html.contains("<ul>\n</ul>"));
    }
}
