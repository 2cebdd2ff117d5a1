//! Mapping between ffmetadata documents and the book-facing record.

pub mod aliases;
pub mod book;
mod date;
mod fields;
pub mod grouping;
mod reader;
mod writer;

pub use aliases::{lookup_alias, RecordField, ALIASES};
pub use book::{apply_to_book, record_from_book, Book, BookEntry};
pub use date::{format_date, parse_pub_date};
pub use fields::{Chapter, FFMetaRecord};
pub use grouping::{compose_grouping, parse_grouping};
pub use reader::{document_to_record, document_to_record_with_report, RecoveredField};
pub use writer::{record_to_document, render_record, RecordWriter, DEFAULT_LIST_SEPARATOR};
