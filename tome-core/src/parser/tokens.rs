//! Filename tokenizing rules shared by the dialects
//!
//! All functions take a file stem (no directory, no extension) or any other
//! free text such as a folder name or an embedded title.

use lazy_static::lazy_static;
use regex::Regex;

/// Volume of an item that is not grouped in a volume
pub const LOOSE_LEAF_VOLUME: &str = "-100000";

/// Chapter of an item without chapter numbering
pub const DEFAULT_CHAPTER: &str = "-100000";

/// Volume that specials are filed under
pub const SPECIAL_VOLUME: &str = "100000";

/// A number, a decimal or a range of either ("3", "3.5", "1-3")
const NUMBER: &str = r"\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?";

lazy_static! {
    static ref BRACKETED: Regex = Regex::new(r"\[[^\]]*\]|\([^)]*\)|\{[^}]*\}").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    static ref MANGA_VOLUME: Vec<Regex> = vec![
        Regex::new(&format!(
            r"(?i)(?:^|[^\p{{L}}])(?:v|vol\.?|volume|tome)\s?(?P<value>{NUMBER})"
        ))
        .unwrap(),
        // 第01巻, 3권, 第2册, 5卷
        Regex::new(r"第?\s?(?P<value>\d+(?:\.\d+)?)\s?(?:巻|권|册|卷)").unwrap(),
    ];

    static ref MANGA_CHAPTER: Vec<Regex> = vec![
        Regex::new(&format!(
            r"(?i)(?:^|[^\p{{L}}])(?:c|ch\.?|chp\.?|chapter|episode|ep\.?)\s?(?P<value>{NUMBER})"
        ))
        .unwrap(),
        // 第12話, 12화
        Regex::new(r"第?\s?(?P<value>\d+(?:\.\d+)?)\s?(?:話|话|화)").unwrap(),
    ];

    static ref COMIC_VOLUME: Vec<Regex> = vec![
        Regex::new(&format!(
            r"(?i)(?:^|[^\p{{L}}])(?:v|vol\.?|volume|book|tome)\s?(?P<value>{NUMBER})"
        ))
        .unwrap(),
    ];

    static ref COMIC_CHAPTER: Vec<Regex> = vec![
        Regex::new(&format!(r"#\s?(?P<value>{NUMBER})")).unwrap(),
        Regex::new(&format!(
            r"(?i)(?:^|[^\p{{L}}])(?:issue\s?#?|ch\.?|chapter|c)\s?(?P<value>{NUMBER})"
        ))
        .unwrap(),
    ];

    /// "Series 012", "Series - 012"; only used when nothing explicit matched
    static ref TRAILING_NUMBER: Regex =
        Regex::new(r"^(?P<series>.+?)(?:\s+-)?\s+(?P<value>\d+(?:\.\d+)?)$").unwrap();

    static ref MANGA_SPECIAL: Regex = Regex::new(
        r"(?i)\b(?:specials?|one[\s-]?shot|omake|extras?|art\s?collection|side\s?stories|bonus|compendium)\b"
    )
    .unwrap();

    static ref COMIC_SPECIAL: Regex = Regex::new(
        r"(?i)\b(?:annuals?|tpb|fcbd|free\s?comic\s?book\s?day|specials?|one[\s-]?shot)\b"
    )
    .unwrap();

    static ref SPECIAL_MARKER: Regex = Regex::new(r"(?i)\bSP(?P<value>\d+)\b").unwrap();

    static ref EDITION: Regex = Regex::new(
        r"(?i)\b(?:omnibus(?:\s+edition)?|uncensored|full[\s-]?colou?r(?:\s+edition)?|(?:digital|deluxe|collector'?s|complete|anniversary)\s+edition)\b"
    )
    .unwrap();

    static ref COVER_IMAGE: Regex =
        Regex::new(r"(?i)^(?:!?cover|folder)\.(?:jpe?g|png|webp|gif|avif)$").unwrap();
}

/// Which rule set to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Manga,
    Comic,
}

impl Flavor {
    fn volume(&self) -> &'static [Regex] {
        match self {
            Flavor::Manga => MANGA_VOLUME.as_slice(),
            Flavor::Comic => COMIC_VOLUME.as_slice(),
        }
    }

    fn chapter(&self) -> &'static [Regex] {
        match self {
            Flavor::Manga => MANGA_CHAPTER.as_slice(),
            Flavor::Comic => COMIC_CHAPTER.as_slice(),
        }
    }

    fn special(&self) -> &'static Regex {
        match self {
            Flavor::Manga => &*MANGA_SPECIAL,
            Flavor::Comic => &*COMIC_SPECIAL,
        }
    }
}

/// Volume label found in `name`, or [`LOOSE_LEAF_VOLUME`]
pub fn parse_volume(name: &str, flavor: Flavor) -> String {
    let prepared = prepare(name);
    first_value(flavor.volume(), &prepared).unwrap_or_else(|| LOOSE_LEAF_VOLUME.to_string())
}

/// Chapter label found in `name`, or [`DEFAULT_CHAPTER`]
pub fn parse_chapter(name: &str, flavor: Flavor) -> String {
    let prepared = prepare(name);

    if let Some(chapter) = first_value(flavor.chapter(), &prepared) {
        return chapter;
    }

    if has_explicit_marker(&prepared, flavor) {
        return DEFAULT_CHAPTER.to_string();
    }

    TRAILING_NUMBER
        .captures(&prepared)
        .and_then(|caps| caps.name("value"))
        .map(|m| format_value(m.as_str()))
        .unwrap_or_else(|| DEFAULT_CHAPTER.to_string())
}

/// Series name in `name`: the text before the first volume, chapter or
/// special marker. Empty when no marker is found.
pub fn parse_series(name: &str, flavor: Flavor) -> String {
    let prepared = prepare(name);

    let marker_start = flavor
        .volume()
        .iter()
        .chain(flavor.chapter())
        .chain([flavor.special(), &*SPECIAL_MARKER])
        .filter_map(|re| re.find(&prepared))
        .map(|m| m.start())
        .min();

    if let Some(start) = marker_start {
        return clean_title(&prepared[..start]);
    }

    TRAILING_NUMBER
        .captures(&prepared)
        .and_then(|caps| caps.name("series"))
        .map(|m| clean_title(m.as_str()))
        .unwrap_or_default()
}

/// Whether the name has an explicit volume or chapter marker
///
/// Trailing bare numbers ("Mob Psycho 100") do not count.
pub fn has_numbering_marker(name: &str, flavor: Flavor) -> bool {
    let prepared = prepare(name);
    flavor
        .volume()
        .iter()
        .chain(flavor.chapter())
        .any(|re| re.is_match(&prepared))
}

/// Whether the name uses one of the special keywords of the flavor
pub fn is_special(name: &str, flavor: Flavor) -> bool {
    flavor.special().is_match(&prepare(name))
}

/// Whether the name carries an explicit `SP01` style marker
pub fn has_special_marker(name: &str) -> bool {
    SPECIAL_MARKER.is_match(&prepare(name))
}

/// Edition marker in the name ("Omnibus", "Full Color", ...) or empty
pub fn parse_edition(name: &str) -> String {
    EDITION
        .find(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Whether a file name (with extension) is a folder cover image
pub fn is_cover_image(file_name: &str) -> bool {
    COVER_IMAGE.is_match(file_name)
}

/// Remove bracketed groups, underscores and stray separators
pub fn clean_title(name: &str) -> String {
    let stripped = BRACKETED.replace_all(name, " ");
    let spaced = stripped.replace('_', " ");
    let collapsed = WHITESPACE.replace_all(&spaced, " ");
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '.' | ',' | ':' | ';'))
        .to_string()
}

fn prepare(name: &str) -> String {
    clean_title(name)
}

fn has_explicit_marker(prepared: &str, flavor: Flavor) -> bool {
    flavor.volume().iter().any(|re| re.is_match(prepared))
        || flavor.special().is_match(prepared)
        || SPECIAL_MARKER.is_match(prepared)
}

fn first_value(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.name("value"))
            .map(|m| format_value(m.as_str()))
    })
}

/// "007" -> "7", "01-03" -> "1-3", "0.5" stays
fn format_value(raw: &str) -> String {
    raw.trim()
        .split('-')
        .map(strip_leading_zeros)
        .collect::<Vec<_>>()
        .join("-")
}

fn strip_leading_zeros(part: &str) -> &str {
    let trimmed = part.trim_start_matches('0');
    if trimmed.is_empty() || trimmed.starts_with('.') {
        // keep a single zero before the decimal point
        &part[part.len() - trimmed.len() - 1..]
    } else {
        trimmed
    }
}
