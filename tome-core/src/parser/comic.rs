//! Comic dialect

use super::tokens::Flavor;
use super::FilenameParser;
use crate::types::LibraryType;

/// Issues written as `#012`, `Issue 12` or a trailing number
pub struct ComicParser;

impl FilenameParser for ComicParser {
    fn library_type(&self) -> LibraryType {
        LibraryType::Comic
    }

    fn flavor(&self) -> Flavor {
        Flavor::Comic
    }
}
