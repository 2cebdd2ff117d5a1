//! Read and write FFmpeg `;FFMETADATA1` chapter files and map them to and
//! from book metadata.

pub mod config;
pub mod error;
pub mod ffmeta;
pub mod metadata;

pub use error::{FFMetaError, Result};
pub use ffmeta::{Document, Writer, WriterOptions};
pub use metadata::{
    apply_to_book, compose_grouping, document_to_record, parse_grouping, record_from_book,
    record_to_document, Book, BookEntry, Chapter, FFMetaRecord,
};
