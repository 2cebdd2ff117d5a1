use crate::ffmeta::Fields;
use serde::Serialize;

/// Book-facing view of an ffmetadata document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FFMetaRecord {
    pub title: String,
    /// Read from `album`; on the book write path it mirrors `title`
    pub album: String,
    pub authors: Vec<String>,
    pub narrators: Vec<String>,
    pub tags: Vec<String>,
    pub series: String,
    pub series_index: f64,
    pub comment: String,
    /// Date-only `YYYY-MM-DD`, or empty when the document has none
    pub pub_date: String,
    /// Global keys the alias table does not know, in document order
    pub other: Fields,
    pub chapters: Vec<Chapter>,
}

/// One `[CHAPTER]` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// Rational time base such as `1/1000`
    pub timebase: String,
    pub start: i64,
    pub end: Option<i64>,
    pub title: String,
    pub other: Fields,
}

impl Chapter {
    pub fn new(
        timebase: impl Into<String>,
        start: i64,
        end: Option<i64>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            timebase: timebase.into(),
            start,
            end,
            title: title.into(),
            other: Fields::new(),
        }
    }
}

impl FFMetaRecord {
    /// A record without a title carries no usable metadata
    pub fn has_metadata(&self) -> bool {
        !self.title.is_empty()
    }
}
