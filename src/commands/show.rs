use anyhow::{bail, Context, Result};
use colored::Colorize;
use ffmetactl::ffmeta::read_ffmeta;
use ffmetactl::metadata::{document_to_record_with_report, Chapter, FFMetaRecord};
use std::path::Path;

pub fn run(path: &Path, json: bool, field: Option<&str>, quiet: bool) -> Result<()> {
    let doc = read_ffmeta(path)
        .with_context(|| format!("Failed to read ffmetadata file: {}", path.display()))?;
    let (record, recovered) = document_to_record_with_report(&doc);

    if let Some(field_name) = field {
        print_single_field(&record, field_name)?;
    } else if json {
        print_json(&record)?;
    } else {
        print_pretty(&record, path, quiet);
        if !recovered.is_empty() && !quiet {
            println!();
            println!("{}", "Recovered fields:".yellow());
            for r in &recovered {
                let location = match r.chapter {
                    Some(n) => format!("chapter {}", n),
                    None => "global".to_string(),
                };
                println!("  {} {}: {:?} -> {}", location, r.key, r.raw, r.fallback);
            }
        }
    }

    Ok(())
}

fn print_single_field(record: &FFMetaRecord, field: &str) -> Result<()> {
    let value = match field {
        "title" => record.title.clone(),
        "album" => record.album.clone(),
        "authors" => record.authors.join("\n"),
        "narrators" => record.narrators.join("\n"),
        "tags" => record.tags.join("\n"),
        "series" => record.series.clone(),
        "series_index" => record.series_index.to_string(),
        "comment" => record.comment.clone(),
        "pub_date" => record.pub_date.clone(),
        "chapters" => record.chapters.len().to_string(),
        other => match record.other.get(other) {
            Some(v) => v.to_string(),
            None => bail!("Unknown field: {}. Valid fields: title, album, authors, narrators, tags, series, series_index, comment, pub_date, chapters, or any extra key in the file", field),
        },
    };

    if !value.is_empty() {
        println!("{}", value);
    }
    Ok(())
}

fn print_json(record: &FFMetaRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{}", json);
    Ok(())
}

fn print_pretty(record: &FFMetaRecord, path: &Path, quiet: bool) {
    if !quiet {
        println!("{}", path.display().to_string().bold());
        println!("{}", "─".repeat(40));
    }

    print_field("Title", &record.title);
    if record.album != record.title {
        print_field("Album", &record.album);
    }
    print_field("Authors", &record.authors.join(", "));
    print_field("Narrators", &record.narrators.join(", "));
    print_field("Tags", &record.tags.join(", "));

    if !record.series.is_empty() {
        print_field(
            "Series",
            &format!("{} #{}", record.series, record.series_index),
        );
    }

    print_field("Published", &record.pub_date);

    for (key, value) in record.other.iter() {
        print_field(key, value);
    }

    if !record.comment.is_empty() {
        println!();
        println!("{}", "Comment:".cyan());
        for line in textwrap_simple(&record.comment, 80) {
            println!("  {}", line);
        }
    }

    if !record.chapters.is_empty() {
        println!();
        println!("{}", format!("Chapters ({}):", record.chapters.len()).cyan());
        for (i, chapter) in record.chapters.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, format_chapter(chapter));
        }
    }
}

fn format_chapter(chapter: &Chapter) -> String {
    let span = match chapter.end {
        Some(end) if end > 0 => format!("{}-{}", chapter.start, end),
        _ => format!("{}-", chapter.start),
    };
    let timebase = if chapter.timebase.is_empty() {
        String::new()
    } else {
        format!(" @{}", chapter.timebase)
    };
    let title = if chapter.title.is_empty() {
        "(untitled)".dimmed().to_string()
    } else {
        chapter.title.clone()
    };
    format!("{}{}  {}", span, timebase, title)
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{:>12}: {}", label.cyan(), value);
    }
}

/// Greedy word wrap for the comment block; blank paragraphs are dropped
fn textwrap_simple(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chapter() {
        let chapter = Chapter::new("1/1000", 0, Some(1500), "Opening");
        assert_eq!(format_chapter(&chapter), "0-1500 @1/1000  Opening");

        let open_ended = Chapter::new("", 10, None, "Tail");
        assert_eq!(format_chapter(&open_ended), "10-  Tail");
    }

    #[test]
    fn test_textwrap_simple() {
        let lines = textwrap_simple("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }
}
