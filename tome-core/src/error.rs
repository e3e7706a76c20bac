//! Error types for Tome Core
//!
//! The parsing core never fails on malformed content: unparseable files come
//! back as `None`, bad identifiers as empty strings. These errors belong to
//! the sidecar extraction that runs before parsing.

use thiserror::Error;

/// Result type alias using TomeError
pub type Result<T> = std::result::Result<T, TomeError>;

/// Top-level error type for all Tome operations
#[derive(Debug, Error)]
pub enum TomeError {
    #[error("Sidecar error: {0}")]
    Sidecar(#[from] SidecarError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while reading embedded metadata out of a library file
#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    #[error("Invalid ComicInfo.xml: {0}")]
    InvalidComicInfo(String),

    #[error("Invalid EPUB: {0}")]
    InvalidEpub(String),
}
