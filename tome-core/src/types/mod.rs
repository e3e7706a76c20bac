//! Core value types shared by the parsers and the merge pipeline

mod age_rating;
mod comic_info;
mod format;
mod library_type;
mod parser_info;

pub use age_rating::AgeRating;
pub use comic_info::{ComicInfo, Person, PersonRole};
pub use format::MangaFormat;
pub use library_type::LibraryType;
pub use parser_info::ParserInfo;
