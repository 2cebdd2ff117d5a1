use crate::ffmeta::{Document, Fields, Section};
use crate::metadata::aliases::{lookup_alias, RecordField, ALIASES};
use crate::metadata::date::{format_date, parse_pub_date, today};
use crate::metadata::fields::{Chapter, FFMetaRecord};
use crate::metadata::grouping::parse_grouping;
use serde::Serialize;
use tracing::{debug, warn};

/// A field whose value could not be coerced and was replaced by a default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveredField {
    /// 1-based chapter number, or `None` for the global section
    pub chapter: Option<usize>,
    pub key: String,
    pub raw: String,
    pub fallback: String,
}

/// Map a parsed document onto a record
pub fn document_to_record(doc: &Document) -> FFMetaRecord {
    document_to_record_with_report(doc).0
}

/// Like [`document_to_record`], also listing every field that fell back
/// to a default
pub fn document_to_record_with_report(doc: &Document) -> (FFMetaRecord, Vec<RecoveredField>) {
    let mut record = FFMetaRecord::default();
    let mut recovered = Vec::new();

    for (key, field) in ALIASES {
        let Some(value) = doc.get(key) else {
            continue;
        };
        apply_field(&mut record, *field, key, value, &mut recovered);
    }

    for (key, value) in doc.global.iter() {
        if lookup_alias(key).is_none() {
            record.other.insert(key, value);
        }
    }

    for section in &doc.sections {
        if section.is_chapter() {
            let number = record.chapters.len() + 1;
            record
                .chapters
                .push(section_to_chapter(section, number, &mut recovered));
        } else {
            debug!(section = %section.name, "skipping non-chapter section");
        }
    }

    (record, recovered)
}

fn apply_field(
    record: &mut FFMetaRecord,
    field: RecordField,
    key: &str,
    value: &str,
    recovered: &mut Vec<RecoveredField>,
) {
    match field {
        RecordField::Title => record.title = value.to_string(),
        RecordField::Album => record.album = value.to_string(),
        RecordField::Authors => record.authors = as_list(value),
        RecordField::Narrators => record.narrators = as_list(value),
        RecordField::Tags => record.tags = as_list(value),
        RecordField::Grouping => {
            let (series, index) = parse_grouping(value);
            record.series = series;
            record.series_index = index;
        }
        RecordField::Comment => record.comment = value.to_string(),
        RecordField::PubDate => {
            if value.trim().is_empty() {
                record.pub_date.clear();
                return;
            }
            record.pub_date = match parse_pub_date(value) {
                Some(date) => format_date(date),
                None => {
                    let fallback = format_date(today());
                    recover(recovered, None, key, value, &fallback);
                    fallback
                }
            };
        }
    }
}

/// The document has no list syntax: one value is the whole list
fn as_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

fn section_to_chapter(
    section: &Section,
    number: usize,
    recovered: &mut Vec<RecoveredField>,
) -> Chapter {
    let mut chapter = Chapter::default();
    let mut other = Fields::new();

    for (key, value) in section.fields.iter() {
        match key.to_ascii_lowercase().as_str() {
            "timebase" => chapter.timebase = value.to_string(),
            "start" => chapter.start = parse_offset(value, number, key, recovered),
            "end" => chapter.end = Some(parse_offset(value, number, key, recovered)),
            "title" => chapter.title = value.to_string(),
            _ => {
                other.insert(key, value);
            }
        }
    }

    chapter.other = other;
    chapter
}

fn parse_offset(
    value: &str,
    number: usize,
    key: &str,
    recovered: &mut Vec<RecoveredField>,
) -> i64 {
    value.trim().parse().unwrap_or_else(|_| {
        recover(recovered, Some(number), key, value, "0");
        0
    })
}

fn recover(
    recovered: &mut Vec<RecoveredField>,
    chapter: Option<usize>,
    key: &str,
    raw: &str,
    fallback: &str,
) {
    warn!(?chapter, key, raw, fallback, "recovered malformed field");
    recovered.push(RecoveredField {
        chapter,
        key: key.to_string(),
        raw: raw.to_string(),
        fallback: fallback.to_string(),
    });
}
