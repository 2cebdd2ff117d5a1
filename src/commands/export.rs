use crate::commands::write_output;
use anyhow::{Context, Result};
use ffmetactl::ffmeta::read_ffmeta;
use ffmetactl::metadata::{apply_to_book, document_to_record, BookEntry};
use std::path::Path;

/// Convert an ffmetadata file into a book TOML file
pub fn run(path: &Path, output: Option<&Path>) -> Result<()> {
    let doc = read_ffmeta(path)
        .with_context(|| format!("Failed to read ffmetadata file: {}", path.display()))?;
    let record = document_to_record(&doc);

    let mut book = BookEntry::default();
    apply_to_book(&record, &mut book);

    let toml = toml::to_string_pretty(&book).context("Failed to serialize book")?;
    write_output(output, toml.as_bytes())
}
