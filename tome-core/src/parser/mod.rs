//! Filename dialects: best-effort guesses from a path alone

mod book;
mod comic;
mod image;
mod manga;
pub mod tokens;

pub use book::BookParser;
pub use comic::ComicParser;
pub use image::ImageParser;
pub use manga::MangaParser;

use crate::types::{LibraryType, MangaFormat, ParserInfo};
use tokens::{Flavor, DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME, SPECIAL_VOLUME};

static MANGA: MangaParser = MangaParser::new(LibraryType::Manga);
static LIGHT_NOVEL: MangaParser = MangaParser::new(LibraryType::LightNovel);
static COMIC: ComicParser = ComicParser;
static BOOK: BookParser = BookParser;
static IMAGE: ImageParser = ImageParser;

/// Trait for guessing series/volume/chapter/title from a file path
///
/// Dialects override the token hooks; the provided [`FilenameParser::parse`]
/// runs the shared flow (folder fallback, editions, specials) on top of them.
pub trait FilenameParser: Send + Sync {
    /// Library type this dialect serves
    fn library_type(&self) -> LibraryType;

    /// Rule set used by the token hooks
    fn flavor(&self) -> Flavor {
        Flavor::Manga
    }

    fn parse_volume(&self, name: &str) -> String {
        tokens::parse_volume(name, self.flavor())
    }

    fn parse_chapter(&self, name: &str) -> String {
        tokens::parse_chapter(name, self.flavor())
    }

    fn parse_series(&self, name: &str) -> String {
        tokens::parse_series(name, self.flavor())
    }

    fn is_special(&self, name: &str) -> bool {
        tokens::is_special(name, self.flavor())
    }

    /// Parse a file path. `root_path` bounds the folder fallback; pass an
    /// empty string to only consider the immediate parent folder.
    ///
    /// Returns `None` when no series can be found.
    fn parse(&self, path: &str, root_path: &str) -> Option<ParserInfo> {
        default_parse(self, path, root_path)
    }
}

/// Get the dialect for a library type
pub fn parser_for(library_type: LibraryType) -> &'static dyn FilenameParser {
    match library_type {
        LibraryType::Manga => &MANGA,
        LibraryType::LightNovel => &LIGHT_NOVEL,
        LibraryType::Comic => &COMIC,
        LibraryType::Book => &BOOK,
        LibraryType::Image => &IMAGE,
    }
}

/// Convert `\` separators to `/` and collapse repeated separators
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(c);
    }
    normalized
}

/// File name without its extension; `.tar.gz` counts as one extension
pub fn file_stem(file_name: &str) -> &str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".tar.gz") {
        return &file_name[..file_name.len() - ".tar.gz".len()];
    }
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Folder names between the library root and the file, nearest first
///
/// Without a usable root only the immediate parent folder is returned.
pub fn folders_till_root<'a>(root_path: &str, file_path: &'a str) -> Vec<&'a str> {
    let Some((dir, _)) = file_path.rsplit_once('/') else {
        return Vec::new();
    };

    let root = normalize_path(root_path);
    let root = root.trim_end_matches('/');

    match dir.strip_prefix(root) {
        Some(rest) if !root.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest
            .split('/')
            .filter(|folder| !folder.is_empty())
            .rev()
            .collect(),
        _ => dir
            .rsplit('/')
            .find(|folder| !folder.is_empty())
            .into_iter()
            .collect(),
    }
}

/// The shared dialect flow
fn default_parse<P>(parser: &P, path: &str, root_path: &str) -> Option<ParserInfo>
where
    P: FilenameParser + ?Sized,
{
    let path = normalize_path(path);
    let mut info = ParserInfo::new(path.as_str());

    if tokens::is_cover_image(&info.filename) {
        return None;
    }

    if info.format == MangaFormat::Image {
        return IMAGE.parse(&path, root_path);
    }

    let stem = file_stem(&info.filename).to_string();
    info.title = stem.clone();
    info.chapters = parser.parse_chapter(&stem);
    info.series = parser.parse_series(&stem);
    info.volumes = parser.parse_volume(&stem);

    if info.series.is_empty() {
        fill_from_folders(parser, &mut info, root_path);
    }

    apply_edition(&mut info, &stem);

    // "v20 c171-180 Omake" is numbered content that mentions an extra, not a special
    if info.chapters == DEFAULT_CHAPTER && info.is_loose_leaf() && parser.is_special(&stem) {
        info.is_special = true;
        fill_from_folders(parser, &mut info, root_path);
    }

    if tokens::has_special_marker(&stem) {
        info.is_special = true;
        info.chapters = DEFAULT_CHAPTER.to_string();
        info.volumes = SPECIAL_VOLUME.to_string();
        fill_from_folders(parser, &mut info, root_path);
    }

    if info.series.is_empty() {
        info.series = tokens::clean_title(&stem);
    }

    finish(info)
}

/// Take missing numbering from the folders and the series from the top folder
fn fill_from_folders<P>(parser: &P, info: &mut ParserInfo, root_path: &str)
where
    P: FilenameParser + ?Sized,
{
    let full_path = info.full_file_path.clone();
    let folders = folders_till_root(root_path, &full_path);
    let Some((top, nested)) = folders.split_last() else {
        return;
    };

    for folder in nested {
        let volume = parser.parse_volume(folder);
        if volume != LOOSE_LEAF_VOLUME && info.is_loose_leaf() {
            info.volumes = volume;
        }
        if tokens::has_numbering_marker(folder, parser.flavor()) {
            let chapter = parser.parse_chapter(folder);
            if chapter != DEFAULT_CHAPTER && info.chapters == DEFAULT_CHAPTER {
                info.chapters = chapter;
            }
        }
    }

    if *top == info.series {
        return;
    }

    let series = if tokens::has_numbering_marker(top, parser.flavor()) {
        parser.parse_series(top)
    } else {
        String::new()
    };

    if series.is_empty() {
        info.series = tokens::clean_title(top);
    } else if info.series.is_empty() || !top.contains(info.series.as_str()) {
        info.series = series;
    }
}

/// Move an edition marker out of the series
fn apply_edition(info: &mut ParserInfo, stem: &str) {
    let edition = tokens::parse_edition(stem);
    if edition.is_empty() {
        return;
    }
    info.series = tokens::clean_title(&info.series.replace(edition.as_str(), ""));
    info.edition = edition;
}

/// Final touches shared by every dialect
fn finish(mut info: ParserInfo) -> Option<ParserInfo> {
    if info.format == MangaFormat::Pdf && info.series.to_lowercase().ends_with(".pdf") {
        let len = info.series.len() - ".pdf".len();
        info.series.truncate(len);
    }

    if info.series.is_empty() {
        None
    } else {
        Some(info)
    }
}
