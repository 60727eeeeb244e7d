/// docdex core — scanning, sorting, and HTML rendering for the docs index.
///
/// This crate contains all business logic with zero frontend dependencies.
///
/// # Modules
///
/// - [`model`] — Run configuration and discovered-document entries.
/// - [`scanner`] — Recursive docs-folder traversal with the suffix filter.
/// - [`sort`] — Natural sort tokenizer and comparator.
/// - [`render`] — Static HTML index generation and output write.
pub mod error;
pub mod model;
pub mod render;
pub mod scanner;
pub mod sort;

pub use error::IndexError;
pub use model::{DocEntry, IndexConfig};

use std::path::PathBuf;
use tracing::info;

/// Outcome of a successful index run.
#[derive(Debug, Clone)]
pub struct IndexSummary {
    /// Number of entries listed in the generated index.
    pub file_count: usize,
    /// Where the index document was written.
    pub output_path: PathBuf,
}

/// Run the full pipeline: check the root, walk it, sort the matches
/// naturally, render the index document, and write it out.
///
/// Terminal outcomes:
/// - `Err(IndexError::MissingRoot)` when the configured root is not a
///   directory. Nothing is walked and nothing is written.
/// - `Ok(IndexSummary)` on success, after the index file has been written.
/// - Any traversal or write error propagates unchanged. No retries; the
///   tool is single-shot and safe to re-invoke.
pub fn run(config: &IndexConfig) -> Result<IndexSummary, IndexError> {
    if !config.root_dir.is_dir() {
        return Err(IndexError::MissingRoot(config.root_dir.clone()));
    }

    // Canonicalize up front so matches carry absolute paths and the rendered
    // links can be derived by prefix-stripping.
    let root = config
        .root_dir
        .canonicalize()
        .map_err(|source| IndexError::Resolve {
            path: config.root_dir.clone(),
            source,
        })?;

    let paths = scanner::scan(&root)?;
    info!(
        "found {} matching entries under {}",
        paths.len(),
        root.display()
    );

    let mut entries: Vec<DocEntry> = paths.into_iter().map(DocEntry::new).collect();
    // Stable sort: entries with equal keys keep their traversal order.
    entries.sort_by(|a, b| a.natural_order(b));

    let sorted: Vec<PathBuf> = entries.into_iter().map(|e| e.path).collect();
    let html = render::render_index(&config.title, &root, &sorted);
    render::write_index(&config.output_path, &html)?;

    Ok(IndexSummary {
        file_count: sorted.len(),
        output_path: config.output_path.clone(),
    })
}
