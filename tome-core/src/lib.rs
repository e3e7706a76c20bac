//! Tome Core Library
//!
//! This crate turns the files of a comic, manga or book library into
//! structured descriptions: which series an item belongs to, its volume and
//! chapter, whether it is a special, and its interpreted embedded metadata.
//! Filename guesses and embedded metadata are merged by
//! [`ReadingItemParser`].

pub mod error;
pub mod identifiers;
pub mod metadata;
pub mod parser;
pub mod reading_item;
pub mod sidecar;
pub mod sort_title;
pub mod types;

pub use error::{Result, SidecarError, TomeError};
pub use metadata::{interpret, InterpretedMetadata};
pub use parser::{parser_for, FilenameParser};
pub use reading_item::ReadingItemParser;
pub use sidecar::read_comic_info;
pub use sort_title::sort_title;
pub use types::{
    AgeRating, ComicInfo, LibraryType, MangaFormat, ParserInfo, Person, PersonRole,
};
