use crate::commands::write_output;
use anyhow::{Context, Result};
use colored::Colorize;
use ffmetactl::config::Config;
use ffmetactl::ffmeta::read_ffmeta;
use ffmetactl::metadata::{document_to_record, record_from_book, BookEntry};
use std::path::Path;

/// Convert a book TOML file into ffmetadata, optionally carrying over the
/// chapters of an existing ffmetadata file
pub fn run(
    book_path: &Path,
    chapters: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(book_path)
        .with_context(|| format!("Failed to read {}", book_path.display()))?;
    let book: BookEntry = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", book_path.display()))?;

    let mut record = record_from_book(&book);

    if let Some(chapter_path) = chapters {
        let doc = read_ffmeta(chapter_path).with_context(|| {
            format!("Failed to read ffmetadata file: {}", chapter_path.display())
        })?;
        record.chapters = document_to_record(&doc).chapters;
    }

    let rendered = config.record_writer(pretty).render(&record);
    if rendered.is_empty() {
        if !quiet {
            eprintln!(
                "{}: {} has no title, nothing to write",
                "No metadata".yellow(),
                book_path.display()
            );
        }
        return Ok(());
    }

    write_output(output, &rendered)
}
