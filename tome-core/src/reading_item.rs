//! Per-file entry point: filename guess merged with embedded metadata
//!
//! The merge is an ordered list of rules over one [`ParserInfo`]:
//!
//! 1. filename dialect, then embedded metadata overrides
//! 2. attach the interpreted metadata
//! 3. specials take the embedded series
//! 4. EPUB reconciliation (light novel titles, plain book fallback)
//! 5. no series, no result

use crate::metadata::{self, InterpretedMetadata};
use crate::parser::tokens::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME, SPECIAL_VOLUME};
use crate::parser::{file_stem, normalize_path, parser_for, tokens, FilenameParser};
use crate::sort_title::sort_title;
use crate::types::{ComicInfo, LibraryType, MangaFormat, ParserInfo};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// ComicInfo `Format` values that mark bonus content
    static ref SPECIAL_FORMAT: Regex = Regex::new(
        r"(?i)\b(?:special|reference|director'?s\s?cut|box\s?set|year\s?one|annotation|annotated|preview|one[\s-]?shot)\b"
    )
    .unwrap();
}

/// Parses library files into [`ParserInfo`]
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ReadingItemParser {
    /// Bounds the folder fallback of the filename dialects
    library_root: String,
}

impl ReadingItemParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict folder fallback to folders below `root`
    pub fn with_library_root(mut self, root: impl AsRef<str>) -> Self {
        self.library_root = normalize_path(root.as_ref());
        self
    }

    pub fn library_root(&self) -> &str {
        &self.library_root
    }

    /// Parse one file
    ///
    /// `comic_info` is only consulted when `enable_metadata` is set. Returns
    /// `None` when no series can be found from any source; the caller should
    /// skip the file.
    pub fn parse(
        &self,
        path: &str,
        library_type: LibraryType,
        comic_info: Option<&ComicInfo>,
        enable_metadata: bool,
    ) -> Option<ParserInfo> {
        let dialect = parser_for(library_type);
        let embedded = comic_info
            .filter(|_| enable_metadata)
            .map(metadata::interpret);

        let mut info = match dialect.parse(path, &self.library_root) {
            Some(info) => info,
            // embedded metadata may still name the series
            None if embedded.is_some() => blank_info(path)?,
            None => return None,
        };

        if let Some(meta) = &embedded {
            apply_embedded(&mut info, meta);
        }

        info.comic_info = embedded;

        apply_special_series(&mut info);
        self.reconcile_epub(&mut info, dialect);

        if info.series.is_empty() {
            tracing::debug!(path = %info.full_file_path, "no series found, skipping");
            return None;
        }

        if info.series_sort.is_empty() {
            info.series_sort = sort_title(&info.series).to_string();
        }

        Some(info)
    }

    /// EPUBs whose series text still carries a volume are usually light
    /// novels named by title, or books the active dialect misread
    fn reconcile_epub(&self, info: &mut ParserInfo, dialect: &dyn FilenameParser) {
        if info.format != MangaFormat::Epub {
            return;
        }

        let has_volume_in_series = dialect.parse_volume(&info.series) != LOOSE_LEAF_VOLUME;
        if !has_volume_in_series {
            return;
        }

        let has_volume_in_title = dialect.parse_volume(&info.title) != LOOSE_LEAF_VOLUME;
        let embedded_volume_missing = info
            .comic_info
            .as_ref()
            .map_or(true, |meta| meta.volume.is_empty());

        if embedded_volume_missing
            && has_volume_in_title
            && (has_volume_in_series || info.series.is_empty())
        {
            tracing::debug!(
                path = %info.full_file_path,
                title = %info.title,
                "promoting title to series"
            );
            info.series = dialect.parse_series(&info.title);
            info.volumes = dialect.parse_volume(&info.title);
            return;
        }

        let fallback =
            parser_for(LibraryType::Book).parse(&info.full_file_path, &self.library_root);
        info.merge(fallback.as_ref());

        if let Some(fallback) = fallback {
            if dialect.parse_volume(&fallback.series) == LOOSE_LEAF_VOLUME {
                tracing::debug!(
                    path = %info.full_file_path,
                    from = %info.series,
                    to = %fallback.series,
                    "book fallback overrides series"
                );
                info.series = fallback.series;
            }
        }
    }
}

/// Start from nothing but the path when the filename gave no series
///
/// Folder cover images stay skipped whatever metadata comes with them.
fn blank_info(path: &str) -> Option<ParserInfo> {
    let mut info = ParserInfo::new(normalize_path(path));
    if tokens::is_cover_image(&info.filename) {
        return None;
    }
    info.title = file_stem(&info.filename).to_string();
    Some(info)
}

/// Embedded fields win over filename guesses wherever they are set
fn apply_embedded(info: &mut ParserInfo, meta: &InterpretedMetadata) {
    if !meta.volume.is_empty() {
        info.volumes = meta.volume.clone();
    }
    if !meta.series.is_empty() {
        info.series = meta.series.clone();
    }
    if !meta.number.is_empty() {
        info.chapters = meta.number.clone();
        if info.is_special && info.chapters != DEFAULT_CHAPTER {
            info.is_special = false;
            if info.volumes == SPECIAL_VOLUME {
                info.volumes = LOOSE_LEAF_VOLUME.to_string();
            }
        }
    }
    if !meta.title.is_empty() {
        info.title = meta.title.clone();
    }
    if !meta.series_sort.is_empty() {
        info.series_sort = meta.series_sort.clone();
    }
    if !meta.localized_series.is_empty() {
        info.localized_series = meta.localized_series.clone();
    }
    if SPECIAL_FORMAT.is_match(&meta.format) {
        info.is_special = true;
        info.chapters = DEFAULT_CHAPTER.to_string();
        info.volumes = SPECIAL_VOLUME.to_string();
    }
}

/// Specials are often named after something other than their series; the
/// embedded series is authoritative for them
///
/// Backs up the series override in [`apply_embedded`] for items whose series
/// was changed after the embedded fields were applied.
fn apply_special_series(info: &mut ParserInfo) {
    if !info.is_special || !info.is_loose_leaf() {
        return;
    }
    let Some(meta) = &info.comic_info else {
        return;
    };
    if !meta.series.is_empty() && meta.series != info.series {
        tracing::debug!(
            path = %info.full_file_path,
            from = %info.series,
            to = %meta.series,
            "special takes embedded series"
        );
        info.series = meta.series.clone();
    }
}
