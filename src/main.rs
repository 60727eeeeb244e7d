//! docdex — static HTML index generator for a local docs folder.
//!
//! Thin binary entry point. All logic lives in the `docdex-core` crate.

use docdex_core::IndexConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Log records go to stderr so stdout
    // carries nothing but the summary line.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("docdex starting");

    let config = IndexConfig::default();
    let summary = docdex_core::run(&config)?;

    println!(
        "Indexed {} file(s) into {}",
        summary.file_count,
        summary.output_path.display()
    );

    Ok(())
}
