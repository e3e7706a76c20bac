//! Container format of a library file

use serde::{Deserialize, Serialize};

const ARCHIVE_EXTENSIONS: &[&str] = &["cbz", "zip", "cbr", "rar", "cb7", "7z", "cbt", "tar.gz"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Container format derived from the file extension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MangaFormat {
    /// Comic archives (cbz, cbr, cb7, ...)
    Archive,

    /// EPUB 2/3
    Epub,

    /// PDF
    Pdf,

    /// A single loose image
    Image,

    #[default]
    Unknown,
}

impl MangaFormat {
    /// Detect the format from a file path or name
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();

        // tar.gz is the only compound extension we accept
        if lower.ends_with(".tar.gz") {
            return MangaFormat::Archive;
        }

        let ext = match lower.rsplit_once('.') {
            Some((_, ext)) if !ext.contains('/') => ext,
            _ => return MangaFormat::Unknown,
        };

        match ext {
            "epub" => MangaFormat::Epub,
            "pdf" => MangaFormat::Pdf,
            e if ARCHIVE_EXTENSIONS.contains(&e) => MangaFormat::Archive,
            e if IMAGE_EXTENSIONS.contains(&e) => MangaFormat::Image,
            _ => MangaFormat::Unknown,
        }
    }

    /// Whether a library scan should look at files of this format
    pub fn is_supported(&self) -> bool {
        !matches!(self, MangaFormat::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(MangaFormat::from_path("a/B v01.CBZ"), MangaFormat::Archive);
        assert_eq!(MangaFormat::from_path("b.tar.gz"), MangaFormat::Archive);
        assert_eq!(MangaFormat::from_path("Dune.epub"), MangaFormat::Epub);
        assert_eq!(MangaFormat::from_path("x/Dune.pdf"), MangaFormat::Pdf);
        assert_eq!(MangaFormat::from_path("001.webp"), MangaFormat::Image);
        assert_eq!(MangaFormat::from_path("notes.txt"), MangaFormat::Unknown);
        assert_eq!(MangaFormat::from_path("dir.d/noext"), MangaFormat::Unknown);
    }
}
