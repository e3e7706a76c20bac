//! ComicInfo equivalent built from an EPUB's OPF package metadata

use crate::error::{Result, SidecarError};
use crate::types::ComicInfo;
use epub::doc::EpubDoc;
use std::io::{Read, Seek};
use std::path::Path;

/// Read the OPF metadata of an EPUB
///
/// Returns `Ok(None)` when the package has no title and no calibre series.
pub fn read_epub_comic_info(path: &Path) -> Result<Option<ComicInfo>> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )
        .into());
    }

    let doc = EpubDoc::new(path)
        .map_err(|e| SidecarError::InvalidEpub(format!("{}: {}", path.display(), e)))?;

    let info = comic_info_from_doc(&doc);
    if info.series.is_empty() && info.title.is_empty() {
        tracing::trace!(path = %path.display(), "EPUB has no usable metadata");
        return Ok(None);
    }

    tracing::debug!(path = %path.display(), series = %info.series, "read OPF metadata");
    Ok(Some(info))
}

fn comic_info_from_doc<R: Read + Seek>(doc: &EpubDoc<R>) -> ComicInfo {
    let get_meta = |key: &str| -> String {
        doc.mdata(key)
            .map(|item| item.value.trim().to_string())
            .unwrap_or_default()
    };

    let get_meta_all = |key: &str| -> Vec<String> {
        doc.metadata
            .iter()
            .filter(|item| item.property == key)
            .map(|item| item.value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    };

    let (year, month, day) = split_date(&get_meta("date"));

    ComicInfo {
        series: get_meta("calibre:series"),
        title: get_meta("title"),
        volume: format_series_index(&get_meta("calibre:series_index")),
        gtin: get_meta("identifier"),
        language_iso: get_meta("language"),
        summary: get_meta("description"),
        publisher: get_meta("publisher"),
        writer: get_meta_all("creator").join(", "),
        year,
        month,
        day,
        ..ComicInfo::default()
    }
}

/// calibre writes indices as floats; "2.0" is volume "2"
fn format_series_index(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(index) if index.is_finite() && index.fract() == 0.0 => format!("{}", index as i64),
        Ok(index) if index.is_finite() => index.to_string(),
        _ => String::new(),
    }
}

/// "2011-08-04T00:00:00+00:00" -> (2011, 8, 4); missing parts are 0
fn split_date(raw: &str) -> (i32, i32, i32) {
    let date = raw.split('T').next().unwrap_or_default();
    let mut parts = date.split('-').map(|part| part.trim().parse::<i32>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
