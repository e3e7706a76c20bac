//! CLI command implementations

mod isbn;
mod parse;
mod scan;
mod sort_title;

pub use isbn::isbn;
pub use parse::parse;
pub use scan::scan;
pub use sort_title::sort_title;

use std::path::Path;
use tome_core::parser::tokens::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME};
use tome_core::{read_comic_info, LibraryType, ParserInfo, ReadingItemParser};

/// Resolved options shared by `parse` and `scan`
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub library_type: LibraryType,

    /// Upper bound of the folder fallback
    pub library_root: Option<String>,

    /// Read and merge embedded metadata
    pub use_metadata: bool,

    /// Parallel jobs for `scan`
    pub jobs: usize,
}

impl ScanOptions {
    fn parser(&self) -> ReadingItemParser {
        match &self.library_root {
            Some(root) => ReadingItemParser::new().with_library_root(root),
            None => ReadingItemParser::new(),
        }
    }
}

/// Read the sidecar (if enabled) and run the resolver on one file
///
/// Unreadable metadata is logged and the file is parsed from its name alone.
fn parse_file(parser: &ReadingItemParser, path: &Path, options: &ScanOptions) -> Option<ParserInfo> {
    let comic_info = if options.use_metadata {
        match read_comic_info(path) {
            Ok(comic_info) => comic_info,
            Err(e) => {
                tracing::warn!("Failed to read metadata from {}: {}", path.display(), e);
                None
            }
        }
    } else {
        None
    };

    parser.parse(
        &path.to_string_lossy(),
        options.library_type,
        comic_info.as_ref(),
        options.use_metadata,
    )
}

/// Sentinel numbering is shown as empty in human output
fn display_number(value: &str) -> &str {
    if value == LOOSE_LEAF_VOLUME || value == DEFAULT_CHAPTER {
        ""
    } else {
        value
    }
}
