/// Run configuration — the explicit settings object passed into the
/// scanner and renderer, replacing ambient working-directory globals.
use std::path::PathBuf;

/// Folder scanned for documents, relative to the current working directory.
pub const DEFAULT_ROOT: &str = "docs";

/// Name of the generated index document, placed inside the docs root.
pub const DEFAULT_OUTPUT: &str = "index.html";

/// Title and heading of the generated page.
pub const DEFAULT_TITLE: &str = "Document Index";

/// Settings for one index run.
///
/// `Default` yields the stock behaviour: scan `docs/` under the current
/// working directory and write `docs/index.html`.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Directory scanned recursively for matching files.
    pub root_dir: PathBuf,
    /// Where the generated HTML document is written (overwritten each run).
    pub output_path: PathBuf,
    /// `<title>` and `<h1>` text of the generated page.
    pub title: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

impl IndexConfig {
    /// Configuration rooted at `root`, writing the index inside it.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root_dir = root.into();
        Self {
            output_path: root_dir.join(DEFAULT_OUTPUT),
            root_dir,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
