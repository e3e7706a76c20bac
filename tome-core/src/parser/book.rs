//! Plain book dialect
//!
//! Books are named after their title. There are no chapters and no folder
//! fallback: a file without volume markers is its own series.

use super::tokens::{self, Flavor};
use super::{apply_edition, file_stem, finish, normalize_path, FilenameParser};
use crate::types::{LibraryType, ParserInfo};

pub struct BookParser;

impl FilenameParser for BookParser {
    fn library_type(&self) -> LibraryType {
        LibraryType::Book
    }

    fn parse_chapter(&self, _name: &str) -> String {
        tokens::DEFAULT_CHAPTER.to_string()
    }

    fn parse_series(&self, name: &str) -> String {
        let series = tokens::parse_series(name, Flavor::Manga);
        if series.is_empty() {
            tokens::clean_title(name)
        } else {
            series
        }
    }

    fn is_special(&self, _name: &str) -> bool {
        false
    }

    fn parse(&self, path: &str, _root_path: &str) -> Option<ParserInfo> {
        let path = normalize_path(path);
        let mut info = ParserInfo::new(path.as_str());

        if tokens::is_cover_image(&info.filename) {
            return None;
        }

        let stem = file_stem(&info.filename).to_string();
        info.title = stem.clone();
        info.volumes = self.parse_volume(&stem);
        info.series = self.parse_series(&stem);
        apply_edition(&mut info, &stem);

        finish(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokens::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME};
    use crate::types::MangaFormat;

    #[test]
    fn test_title_is_series() {
        let info = BookParser
            .parse("/books/Tolkien/The Hobbit.epub", "/books")
            .unwrap();
        assert_eq!(info.series, "The Hobbit");
        assert_eq!(info.volumes, LOOSE_LEAF_VOLUME);
        assert_eq!(info.chapters, DEFAULT_CHAPTER);
        assert_eq!(info.format, MangaFormat::Epub);
    }

    #[test]
    fn test_volume_in_name() {
        let info = BookParser
            .parse("/books/Sword Art Online Vol 3.epub", "")
            .unwrap();
        assert_eq!(info.series, "Sword Art Online");
        assert_eq!(info.volumes, "3");
    }

    #[test]
    fn test_empty_name_is_unparseable() {
        assert!(BookParser.parse("/books/[Scan].pdf", "/books").is_none());
    }
}
