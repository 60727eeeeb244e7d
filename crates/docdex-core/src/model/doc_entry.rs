/// A document discovered by the scanner, paired with its natural-sort key.
///
/// Entries exist only to drive the sort pass; after rendering, the paths
/// are all that remain.
use crate::sort::{natural_cmp, tokenize, Token};
use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DocEntry {
    /// Absolute path of the matched entry.
    pub path: PathBuf,
    /// Tokenized base name: alternating text/number runs.
    pub key: Vec<Token>,
}

impl DocEntry {
    /// Build an entry by tokenizing the path's base name.
    ///
    /// A path with no base name (e.g. `/`) gets an empty key, which sorts
    /// before every non-empty key.
    pub fn new(path: PathBuf) -> Self {
        let key = match path.file_name() {
            Some(name) => tokenize(&name.to_string_lossy()),
            None => Vec::new(),
        };
        Self { path, key }
    }

    /// Natural ordering against another entry.
    pub fn natural_order(&self, other: &Self) -> Ordering {
        natural_cmp(&self.key, &other.key)
    }
}
