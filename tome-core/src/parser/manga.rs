//! Manga dialect (also used for light novels)

use super::FilenameParser;
use crate::types::LibraryType;

/// Volumes and chapters written as `v01`, `Vol. 1`, `c003`, `第1巻`, ...
pub struct MangaParser {
    library_type: LibraryType,
}

impl MangaParser {
    pub const fn new(library_type: LibraryType) -> Self {
        Self { library_type }
    }
}

impl Default for MangaParser {
    fn default() -> Self {
        Self::new(LibraryType::Manga)
    }
}

impl FilenameParser for MangaParser {
    fn library_type(&self) -> LibraryType {
        self.library_type
    }
}
