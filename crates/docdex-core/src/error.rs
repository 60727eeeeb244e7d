/// Crate error type — every failure in the index pipeline funnels into
/// [`IndexError`], which the binary reports and maps to a non-zero exit.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// The configured docs root does not exist (or is not a directory).
    /// Raised before any traversal; nothing has been read or written.
    #[error("docs directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    /// The docs root could not be canonicalized to an absolute path.
    #[error("failed to resolve {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be read during traversal. The first such
    /// error aborts the walk.
    #[error("directory walk failed: {0}")]
    Walk(#[from] jwalk::Error),

    /// The index document could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
