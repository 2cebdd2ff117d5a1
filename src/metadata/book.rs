//! The catalog side: a book entity and the two conversions between it and
//! an [`FFMetaRecord`].

use crate::metadata::date::{format_date, parse_pub_date, today};
use crate::metadata::fields::FFMetaRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accessors a catalog book exposes to the mapper
pub trait Book {
    fn title(&self) -> &str;
    fn set_title(&mut self, title: String);
    fn authors(&self) -> &[String];
    fn set_authors(&mut self, authors: Vec<String>);
    fn narrators(&self) -> &[String];
    fn set_narrators(&mut self, narrators: Vec<String>);
    fn tags(&self) -> &[String];
    fn set_tags(&mut self, tags: Vec<String>);
    fn series(&self) -> &str;
    fn set_series(&mut self, series: String);
    fn series_index(&self) -> f64;
    fn set_series_index(&mut self, index: f64);
    fn comments(&self) -> &str;
    fn set_comments(&mut self, comments: String);
    fn pubdate(&self) -> Option<NaiveDate>;
    fn set_pubdate(&mut self, date: Option<NaiveDate>);
}

/// Plain book entity, stored as TOML by the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub narrators: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub series_index: f64,
    #[serde(default)]
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubdate: Option<NaiveDate>,
}

impl Book for BookEntry {
    fn title(&self) -> &str {
        &self.title
    }
    fn set_title(&mut self, title: String) {
        self.title = title;
    }
    fn authors(&self) -> &[String] {
        &self.authors
    }
    fn set_authors(&mut self, authors: Vec<String>) {
        self.authors = authors;
    }
    fn narrators(&self) -> &[String] {
        &self.narrators
    }
    fn set_narrators(&mut self, narrators: Vec<String>) {
        self.narrators = narrators;
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }
    fn series(&self) -> &str {
        &self.series
    }
    fn set_series(&mut self, series: String) {
        self.series = series;
    }
    fn series_index(&self) -> f64 {
        self.series_index
    }
    fn set_series_index(&mut self, index: f64) {
        self.series_index = index;
    }
    fn comments(&self) -> &str {
        &self.comments
    }
    fn set_comments(&mut self, comments: String) {
        self.comments = comments;
    }
    fn pubdate(&self) -> Option<NaiveDate> {
        self.pubdate
    }
    fn set_pubdate(&mut self, date: Option<NaiveDate>) {
        self.pubdate = date;
    }
}

/// Build a record from a catalog book (write path). The album mirrors the
/// title; chapters are left for the caller to attach.
pub fn record_from_book<B: Book + ?Sized>(book: &B) -> FFMetaRecord {
    FFMetaRecord {
        title: book.title().to_string(),
        album: book.title().to_string(),
        authors: book.authors().to_vec(),
        narrators: book.narrators().to_vec(),
        tags: book.tags().to_vec(),
        series: book.series().to_string(),
        series_index: book.series_index(),
        comment: book.comments().to_string(),
        pub_date: book.pubdate().map(format_date).unwrap_or_default(),
        ..Default::default()
    }
}

/// Copy a record's fields onto a catalog book. An unparseable date becomes
/// today; an empty one clears the book's date.
pub fn apply_to_book<B: Book + ?Sized>(record: &FFMetaRecord, book: &mut B) {
    book.set_title(record.title.clone());
    book.set_authors(record.authors.clone());
    book.set_narrators(record.narrators.clone());
    book.set_tags(record.tags.clone());
    book.set_series(record.series.clone());
    book.set_series_index(record.series_index);
    book.set_comments(record.comment.clone());

    let pubdate = if record.pub_date.trim().is_empty() {
        None
    } else {
        Some(parse_pub_date(&record.pub_date).unwrap_or_else(today))
    };
    book.set_pubdate(pubdate);
}
