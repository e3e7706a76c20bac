//! ComicInfo.xml inside zip based archives (cbz, zip)

use crate::error::{Result, SidecarError};
use crate::types::ComicInfo;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

const COMIC_INFO_NAME: &str = "comicinfo.xml";

/// Read `ComicInfo.xml` from a zip archive
///
/// The entry is matched case-insensitively and may live in any folder; the
/// shallowest match wins.
pub fn read_archive_comic_info(path: &Path) -> Result<Option<ComicInfo>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| SidecarError::InvalidArchive(format!("{}: {}", path.display(), e)))?;

    let Some(entry_name) = find_comic_info(archive.file_names()) else {
        return Ok(None);
    };

    let mut entry = archive
        .by_name(&entry_name)
        .map_err(|e| SidecarError::InvalidArchive(e.to_string()))?;

    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;

    let xml = String::from_utf8_lossy(&bytes);
    let comic_info = ComicInfo::from_xml(xml.trim_start_matches('\u{feff}'))
        .map_err(|e| SidecarError::InvalidComicInfo(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), entry = %entry_name, "read ComicInfo.xml");
    Ok(Some(comic_info))
}

fn find_comic_info<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    names
        .filter(|name| {
            name.rsplit('/')
                .next()
                .is_some_and(|base| base.eq_ignore_ascii_case(COMIC_INFO_NAME))
        })
        .min_by_key(|name| name.matches('/').count())
        .map(str::to_string)
}
