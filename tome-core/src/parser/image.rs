//! Image dialect: loose images grouped by the folders they live in

use super::tokens::{self, Flavor};
use super::{file_stem, finish, folders_till_root, normalize_path, FilenameParser};
use crate::types::{LibraryType, ParserInfo};

pub struct ImageParser;

impl FilenameParser for ImageParser {
    fn library_type(&self) -> LibraryType {
        LibraryType::Image
    }

    fn parse(&self, path: &str, root_path: &str) -> Option<ParserInfo> {
        let path = normalize_path(path);
        let mut info = ParserInfo::new(path.as_str());
        let stem = file_stem(&info.filename).to_string();
        info.title = stem.clone();

        let folders = folders_till_root(root_path, &path);
        let Some(parent) = folders.first() else {
            info.series = tokens::clean_title(&stem);
            return finish(info);
        };

        if tokens::has_numbering_marker(parent, Flavor::Manga) {
            // ".../Akame ga KILL!/Vol 1/001.png"
            info.volumes = self.parse_volume(parent);
            info.chapters = self.parse_chapter(parent);
            info.series = self.parse_series(parent);
            if info.series.is_empty() {
                info.series = folders
                    .get(1)
                    .map(|folder| tokens::clean_title(folder))
                    .unwrap_or_default();
            }
        } else {
            info.series = tokens::clean_title(parent);
        }

        if info.series.is_empty() {
            info.series = tokens::clean_title(&stem);
        }

        finish(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokens::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME};
    use crate::types::MangaFormat;

    #[test]
    fn test_series_from_parent_folder() {
        let info = ImageParser
            .parse("/images/Holiday 2019/IMG_0001.jpg", "/images")
            .unwrap();
        assert_eq!(info.series, "Holiday 2019");
        assert_eq!(info.volumes, LOOSE_LEAF_VOLUME);
        assert_eq!(info.chapters, DEFAULT_CHAPTER);
        assert_eq!(info.format, MangaFormat::Image);
        assert_eq!(info.title, "IMG_0001");
    }

    #[test]
    fn test_volume_folder_uses_grandparent() {
        let info = ImageParser
            .parse("/images/Akame ga KILL!/Vol 1/001.png", "/images")
            .unwrap();
        assert_eq!(info.series, "Akame ga KILL!");
        assert_eq!(info.volumes, "1");
    }

    #[test]
    fn test_numbered_folder_with_series() {
        let info = ImageParser
            .parse("/images/Akame ga KILL! c003/001.png", "/images")
            .unwrap();
        assert_eq!(info.series, "Akame ga KILL!");
        assert_eq!(info.chapters, "3");
    }

    #[test]
    fn test_image_at_root() {
        let info = ImageParser
            .parse("/images/Sunset.webp", "/images")
            .unwrap();
        assert_eq!(info.series, "Sunset");
    }

    #[test]
    fn test_images_in_manga_library_use_image_rules() {
        let info = crate::parser::parser_for(LibraryType::Manga)
            .parse("/manga/Akame ga KILL!/Vol 2/014.jpg", "/manga")
            .unwrap();
        assert_eq!(info.series, "Akame ga KILL!");
        assert_eq!(info.volumes, "2");
    }
}
