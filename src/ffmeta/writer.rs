use crate::ffmeta::document::{Document, Fields};
use crate::ffmeta::reader::HEADER;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output formatting, fixed when the [`Writer`] is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterOptions {
    /// Align `=` within each section and put a blank line before section
    /// headers. Compact output (`key=value`) matches what FFmpeg writes.
    #[serde(default)]
    pub pretty_format: bool,
}

/// Renders a [`Document`] back to ffmetadata text
#[derive(Debug, Clone, Copy, Default)]
pub struct Writer {
    options: WriterOptions,
}

impl Writer {
    pub fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    /// Render a document. A document without global keys renders to empty
    /// output, which callers treat as "no metadata".
    pub fn render(&self, doc: &Document) -> Vec<u8> {
        if doc.global.is_empty() {
            return Vec::new();
        }

        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');

        self.render_fields(&mut out, &doc.global);

        for section in &doc.sections {
            if self.options.pretty_format {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section.name));
            self.render_fields(&mut out, &section.fields);
        }

        out.into_bytes()
    }

    /// Render straight into a byte sink
    pub fn write_to<W: Write>(&self, doc: &Document, mut sink: W) -> io::Result<()> {
        sink.write_all(&self.render(doc))
    }

    fn render_fields(&self, out: &mut String, fields: &Fields) {
        let escaped: Vec<(String, String)> = fields
            .iter()
            .map(|(k, v)| (escape_key(k), escape(v)))
            .collect();

        if self.options.pretty_format {
            let width = escaped
                .iter()
                .map(|(k, _)| k.chars().count())
                .max()
                .unwrap_or(0);
            for (k, v) in &escaped {
                out.push_str(&format!("{:<width$} = {}\n", k, v, width = width));
            }
        } else {
            for (k, v) in &escaped {
                out.push_str(&format!("{}={}\n", k, v));
            }
        }
    }
}

/// Backslash-escape the characters FFmpeg treats as special, plus leading
/// and trailing blanks the reader would otherwise trim
fn escape(s: &str) -> String {
    let lead = s.len() - s.trim_start().len();
    let tail = s.trim_end().len();

    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        let edge_blank = c.is_whitespace() && (i < lead || i >= tail);
        if edge_blank || matches!(c, '=' | ';' | '#' | '\\' | '\n') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Keys also can't open with `[`, or the line would read as a section header
fn escape_key(key: &str) -> String {
    match key.strip_prefix('[') {
        Some(rest) => format!("\\[{}", escape(rest)),
        None => escape(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffmeta::reader::parse;

    fn sample_document() -> Document {
        let mut doc = Document::new();
        doc.global.insert("title", "Dune");
        doc.global.insert("album_artist", "Frank Herbert");
        let chapter = doc.push_section("CHAPTER");
        chapter.fields.insert("TIMEBASE", "1/1000");
        chapter.fields.insert("START", "0");
        chapter.fields.insert("title", "Book One");
        doc
    }

    #[test]
    fn test_render_compact() {
        let out = Writer::default().render(&sample_document());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ";FFMETADATA1\ntitle=Dune\nalbum_artist=Frank Herbert\n[CHAPTER]\nTIMEBASE=1/1000\nSTART=0\ntitle=Book One\n"
        );
    }

    #[test]
    fn test_render_pretty_aligns_equals() {
        let writer = Writer::new(WriterOptions {
            pretty_format: true,
        });
        let out = String::from_utf8(writer.render(&sample_document())).unwrap();
        assert_eq!(
            out,
            ";FFMETADATA1\ntitle        = Dune\nalbum_artist = Frank Herbert\n\n[CHAPTER]\nTIMEBASE = 1/1000\nSTART    = 0\ntitle    = Book One\n"
        );
    }

    #[test]
    fn test_render_empty_document_is_empty() {
        assert!(Writer::default().render(&Document::new()).is_empty());

        let mut chapters_only = Document::new();
        chapters_only.push_section("CHAPTER").fields.insert("START", "0");
        assert!(Writer::default().render(&chapters_only).is_empty());
    }

    #[test]
    fn test_render_escapes_special_characters() {
        let mut doc = Document::new();
        doc.global.insert("comment", "a=b; c#d \\ e\nf");
        let out = String::from_utf8(Writer::default().render(&doc)).unwrap();
        assert_eq!(out, ";FFMETADATA1\ncomment=a\\=b\\; c\\#d \\\\ e\\\nf\n");
    }

    #[test]
    fn test_render_then_parse_preserves_content() {
        let mut doc = sample_document();
        doc.global.insert("comment", "multi\nline = value; really");

        for pretty_format in [false, true] {
            let writer = Writer::new(WriterOptions { pretty_format });
            let parsed = parse(&writer.render(&doc)).unwrap();
            assert_eq!(parsed, doc);
        }
    }

    #[test]
    fn test_bracketed_key_round_trips() {
        let doc = parse(b";FFMETADATA1\ntitle=T\n\\[x=1\n").unwrap();
        assert_eq!(doc.get("[x"), Some("1"));

        for pretty_format in [false, true] {
            let rendered = Writer::new(WriterOptions { pretty_format }).render(&doc);
            let text = String::from_utf8(rendered.clone()).unwrap();
            assert!(text.contains("\\[x"), "{}", text);
            assert_eq!(parse(&rendered).unwrap(), doc);
        }
    }

    #[test]
    fn test_edge_whitespace_round_trips() {
        let mut doc = Document::new();
        doc.global.insert("comment", " padded ");
        doc.global.insert("description", "ends with newline\n");
        doc.global.insert("blank", "   ");
        doc.global.insert(" spaced key", "\tvalue");

        for pretty_format in [false, true] {
            let writer = Writer::new(WriterOptions { pretty_format });
            assert_eq!(parse(&writer.render(&doc)).unwrap(), doc);
        }
    }

    #[test]
    fn test_escape_marks_only_edge_whitespace() {
        assert_eq!(escape(" a b "), "\\ a b\\ ");
        assert_eq!(escape_key("[x"), "\\[x");
        assert_eq!(escape_key("x[y"), "x[y");
    }

    #[test]
    fn test_write_to_sink() {
        let mut buf = Vec::new();
        Writer::default()
            .write_to(&sample_document(), &mut buf)
            .unwrap();
        assert!(buf.starts_with(b";FFMETADATA1\n"));
    }
}
