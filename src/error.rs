//! Error types for the vocab-sheet library

use thiserror::Error;

/// Result type alias using SheetError
pub type Result<T> = std::result::Result<T, SheetError>;

/// Errors that can occur while building a vocabulary sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Reading the vocabulary list or template, or writing the output, failed
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The template image could not be decoded
    #[error("Template image could not be loaded: {0}")]
    Image(#[from] image::ImageError),

    /// The vocabulary text is not valid UTF-8
    #[error("Vocabulary text is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Geometry that cannot be laid out at all
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// The page tree object does not exist
    #[error("Page tree with ID {0:?} not found")]
    PageTreeNotFound(lopdf::ObjectId),

    /// The page tree object exists but is not a dictionary
    #[error("Object {0:?} is not a page tree dictionary")]
    InvalidPageTree(lopdf::ObjectId),
}
