//! Error types for roadsigns operations.
//!
//! Every variant describes a document that does not have the shape the
//! extractor relies on. None of them are recoverable: callers propagate them
//! and abort the run.

use thiserror::Error;

/// Errors that can occur while parsing the register page or writing output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("HTTP status {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("<{open}> element cannot be closed by '{found}' end tag")]
    UnmatchedEndTag { open: String, found: String },

    #[error("void element <{element}> cannot contain {content}")]
    VoidContent { element: String, content: String },

    #[error("unclosed elements at end of input: {}", .0.join(", "))]
    UnclosedElements(Vec<String>),

    #[error("unexpected document shape: {0}")]
    Shape(String),

    #[error("invalid {attr} value {value:?}")]
    InvalidSpan { attr: &'static str, value: String },

    #[error("{attr} of 0 is not supported")]
    ZeroSpan { attr: &'static str },

    #[error("cell in row {row} overlaps a spanning cell at column {column}")]
    SpanOverlap { row: usize, column: usize },

    #[error("row {row} leaves column {column} uncovered")]
    UncoveredColumn { row: usize, column: usize },

    #[error("document body not found: no <div class=\"{class}\">")]
    MissingBody { class: String },

    #[error("expected 2 sections, found {found}")]
    SectionCount { found: usize },
}

impl Error {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        Error::Shape(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
