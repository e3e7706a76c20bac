//! Library type selecting the filename dialect

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of library a file lives in
///
/// Each type selects a filename dialect in [`crate::parser::parser_for`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LibraryType {
    /// Japanese style volumes and chapters (`v01 c003`)
    #[default]
    Manga,

    /// Western comics with issue numbers (`#12`, `Annual`)
    Comic,

    /// Reflowable books (epub/pdf) named after the title
    Book,

    /// Light novels; named like manga but stored as epubs
    LightNovel,

    /// Loose images grouped by folder
    Image,
}

impl LibraryType {
    /// All library types, in declaration order
    pub const ALL: [LibraryType; 5] = [
        LibraryType::Manga,
        LibraryType::Comic,
        LibraryType::Book,
        LibraryType::LightNovel,
        LibraryType::Image,
    ];

    /// Lowercase name used on the command line and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::Manga => "manga",
            LibraryType::Comic => "comic",
            LibraryType::Book => "book",
            LibraryType::LightNovel => "light_novel",
            LibraryType::Image => "image",
        }
    }
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibraryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "manga" => Ok(LibraryType::Manga),
            "comic" | "comics" => Ok(LibraryType::Comic),
            "book" | "books" => Ok(LibraryType::Book),
            "light_novel" | "lightnovel" => Ok(LibraryType::LightNovel),
            "image" | "images" => Ok(LibraryType::Image),
            other => Err(format!("unknown library type '{}'", other)),
        }
    }
}
