//! Vitascan Ingest — document text extraction and normalization.

pub mod normalize;
pub mod source;

pub use normalize::normalize;
pub use source::{FileExtractor, FileType, TextExtractor};
