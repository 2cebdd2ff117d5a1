//! The ffmetadata text format: header check, section/key tokenizing, and
//! rendering back to text.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{Document, Fields, Section, CHAPTER_SECTION};
pub use reader::{parse, read_document, read_ffmeta, validate, HEADER};
pub use writer::{Writer, WriterOptions};
