/// Data model for an index run.
///
/// Re-exports the run configuration and the discovered-document entry.
pub mod config;
pub mod doc_entry;

pub use config::IndexConfig;
pub use doc_entry::DocEntry;
