//! Embedded metadata extraction
//!
//! Pulls a [`ComicInfo`] record out of a library file so it can be handed to
//! [`crate::ReadingItemParser::parse`]. Comic archives carry a
//! `ComicInfo.xml`; EPUBs carry the same facts in their OPF package.

mod archive;
mod opf;

pub use archive::read_archive_comic_info;
pub use opf::read_epub_comic_info;

use crate::error::Result;
use crate::types::{ComicInfo, MangaFormat};
use std::path::Path;

/// Read the embedded metadata of a file
///
/// Returns `Ok(None)` when the file type carries no readable metadata or the
/// file has none. Errors are reserved for files that claim a container
/// format but cannot be opened as one.
pub fn read_comic_info(path: &Path) -> Result<Option<ComicInfo>> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match MangaFormat::from_path(&file_name) {
        MangaFormat::Archive if is_zip(&file_name) => read_archive_comic_info(path),
        MangaFormat::Epub => read_epub_comic_info(path),
        _ => {
            tracing::trace!(path = %path.display(), "no embedded metadata for file type");
            Ok(None)
        }
    }
}

fn is_zip(file_name: &str) -> bool {
    file_name.ends_with(".cbz") || file_name.ends_with(".zip")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_unsupported_types_have_no_metadata() {
        let dir = TempDir::new().unwrap();
        for name in ["Batman 001.cbr", "Scan.pdf", "page.png", "notes.txt"] {
            let path = dir.path().join(name);
            std::fs::File::create(&path)
                .unwrap()
                .write_all(b"data")
                .unwrap();
            assert!(read_comic_info(&path).unwrap().is_none(), "{name}");
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_comic_info(&dir.path().join("missing.cbz")).is_err());
    }
}
