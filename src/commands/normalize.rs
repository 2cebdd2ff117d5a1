use crate::commands::write_output;
use anyhow::{Context, Result};
use colored::Colorize;
use ffmetactl::config::Config;
use ffmetactl::ffmeta::read_ffmeta;
use ffmetactl::metadata::document_to_record;
use std::path::Path;
use tracing::debug;

/// Parse an ffmetadata file, map it to a record, and render it back
pub fn run(
    path: &Path,
    output: Option<&Path>,
    pretty: bool,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let doc = read_ffmeta(path)
        .with_context(|| format!("Failed to read ffmetadata file: {}", path.display()))?;
    let record = document_to_record(&doc);

    let rendered = config.record_writer(pretty).render(&record);
    if rendered.is_empty() {
        if !quiet {
            eprintln!(
                "{}: {} has no title, nothing to write",
                "No metadata".yellow(),
                path.display()
            );
        }
        return Ok(());
    }

    debug!(bytes = rendered.len(), chapters = record.chapters.len(), "normalized");
    write_output(output, &rendered)
}
