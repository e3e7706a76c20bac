//! The canonical description of a library file

use super::MangaFormat;
use crate::metadata::InterpretedMetadata;
use crate::parser::tokens::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME};
use serde::{Deserialize, Serialize};

/// Everything the parsers could work out about one file
///
/// A `ParserInfo` handed out by [`crate::ReadingItemParser`] always has a
/// non-empty `series`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserInfo {
    /// Series the file belongs to
    pub series: String,

    /// Sortable form of the series
    pub series_sort: String,

    /// Alternative (usually translated) series name
    pub localized_series: String,

    /// Volume label, or the loose-leaf sentinel
    pub volumes: String,

    /// Chapter/issue label, or the default chapter sentinel
    pub chapters: String,

    /// Title of this file (falls back to the file name without extension)
    pub title: String,

    /// Edition marker removed from the series ("Omnibus", "Full Color", ...)
    pub edition: String,

    /// File name with extension
    pub filename: String,

    /// Normalized full path
    pub full_file_path: String,

    pub format: MangaFormat,

    /// Bonus content that is not part of the numbered run
    pub is_special: bool,

    /// Interpreted embedded metadata, if the file had any
    pub comic_info: Option<InterpretedMetadata>,
}

impl ParserInfo {
    /// Create an empty info for a normalized path
    pub fn new(full_file_path: impl Into<String>) -> Self {
        let full_file_path = full_file_path.into();
        let filename = full_file_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            series: String::new(),
            series_sort: String::new(),
            localized_series: String::new(),
            volumes: LOOSE_LEAF_VOLUME.to_string(),
            chapters: DEFAULT_CHAPTER.to_string(),
            title: String::new(),
            edition: String::new(),
            format: MangaFormat::from_path(&filename),
            filename,
            full_file_path,
            is_special: false,
            comic_info: None,
        }
    }

    /// Whether the volume is the loose-leaf sentinel
    pub fn is_loose_leaf(&self) -> bool {
        self.volumes == LOOSE_LEAF_VOLUME
    }

    /// Fill fields this info left empty (or at their sentinel) from `other`
    ///
    /// Fields this info already has are never overwritten.
    pub fn merge(&mut self, other: Option<&ParserInfo>) {
        let Some(other) = other else {
            return;
        };

        if self.chapters.is_empty() || self.chapters == DEFAULT_CHAPTER {
            self.chapters = other.chapters.clone();
        }
        if self.volumes.is_empty() || self.volumes == LOOSE_LEAF_VOLUME {
            self.volumes = other.volumes.clone();
        }
        if self.edition.is_empty() {
            self.edition = other.edition.clone();
        }
        if self.title.is_empty() {
            self.title = other.title.clone();
        }
        if self.series.is_empty() {
            self.series = other.series.clone();
        }
        self.is_special = self.is_special || other.is_special;
    }
}
