/// Scanner module — enumerates index candidates under the docs root.
///
/// Uses `jwalk`'s rayon-backed parallel traversal. Sibling ordering is
/// unspecified; callers sort the result afterwards, so no ordering guarantee
/// is needed here.
pub mod filter;

use crate::error::IndexError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recursively walk `root` and collect every entry whose name passes the
/// suffix filter. `root` should already be canonical so the returned paths
/// are absolute.
///
/// Read-only: no depth limit, symlinks are not followed, hidden entries are
/// visited like any other. The first directory-read error aborts the walk
/// and propagates.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>, IndexError> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    let mut matches = Vec::new();
    for entry_result in walker {
        let entry = entry_result?;
        let path = entry.path();

        // The root itself is never a candidate.
        if path == root {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if filter::matches_entry(&name, entry.file_type().is_file()) {
            matches.push(path);
        }
    }

    debug!(
        "walk of {} matched {} entries",
        root.display(),
        matches.len()
    );
    Ok(matches)
}
