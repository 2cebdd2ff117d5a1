use crate::ffmeta::{Document, Fields, Writer, WriterOptions, CHAPTER_SECTION};
use crate::metadata::aliases::{RecordField, ALIASES};
use crate::metadata::fields::{Chapter, FFMetaRecord};
use crate::metadata::grouping::compose_grouping;

/// Separator used to fold list fields into one document value
pub const DEFAULT_LIST_SEPARATOR: &str = ", ";

/// Turns records into ffmetadata documents and text
#[derive(Debug, Clone)]
pub struct RecordWriter {
    writer: Writer,
    list_separator: String,
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new(WriterOptions::default(), DEFAULT_LIST_SEPARATOR)
    }
}

impl RecordWriter {
    pub fn new(options: WriterOptions, list_separator: impl Into<String>) -> Self {
        Self {
            writer: Writer::new(options),
            list_separator: list_separator.into(),
        }
    }

    pub fn to_document(&self, record: &FFMetaRecord) -> Document {
        let mut doc = Document::new();

        for (key, field) in ALIASES {
            let value = self.field_value(record, *field);
            if !value.is_empty() {
                doc.global.insert(*key, value);
            }
        }

        for (key, value) in record.other.iter() {
            doc.global.insert(key, value);
        }

        for chapter in &record.chapters {
            let section = doc.push_section(CHAPTER_SECTION);
            write_chapter(chapter, &mut section.fields);
        }

        doc
    }

    /// Render a record to ffmetadata text. A record without a title renders
    /// to empty output: no header and no chapters.
    pub fn render(&self, record: &FFMetaRecord) -> Vec<u8> {
        if !record.has_metadata() {
            return Vec::new();
        }
        self.writer.render(&self.to_document(record))
    }

    fn field_value(&self, record: &FFMetaRecord, field: RecordField) -> String {
        match field {
            RecordField::Title => record.title.clone(),
            RecordField::Album => record.album.clone(),
            RecordField::Authors => record.authors.join(self.list_separator.as_str()),
            RecordField::Narrators => record.narrators.join(self.list_separator.as_str()),
            RecordField::Tags => record.tags.join(self.list_separator.as_str()),
            RecordField::Grouping => compose_grouping(&record.series, record.series_index),
            RecordField::Comment => record.comment.clone(),
            RecordField::PubDate => record.pub_date.clone(),
        }
    }
}

fn write_chapter(chapter: &Chapter, fields: &mut Fields) {
    if !chapter.timebase.is_empty() {
        fields.insert("TIMEBASE", chapter.timebase.as_str());
    }
    fields.insert("START", chapter.start.to_string());
    if let Some(end) = chapter.end.filter(|&end| end > 0) {
        fields.insert("END", end.to_string());
    }
    if !chapter.title.is_empty() {
        fields.insert("title", chapter.title.as_str());
    }
    for (key, value) in chapter.other.iter() {
        fields.insert(key, value);
    }
}

/// Map a record onto a document with the default list separator
pub fn record_to_document(record: &FFMetaRecord) -> Document {
    RecordWriter::default().to_document(record)
}

/// Render a record with the given formatting options
pub fn render_record(record: &FFMetaRecord, options: WriterOptions) -> Vec<u8> {
    RecordWriter::new(options, DEFAULT_LIST_SEPARATOR).render(record)
}
