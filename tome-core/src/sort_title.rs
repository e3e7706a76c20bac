//! Sortable titles: drop one leading article ("The Hobbit" -> "Hobbit")

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Leading articles and short prepositions, all lowercase
const ARTICLES: &[&str] = &[
    // English
    "a", "an", "the",
    // Spanish
    "el", "la", "los", "las", "un", "una", "unos", "unas",
    // French
    "le", "les", "une", "des", "du",
    // German
    "der", "die", "das", "den", "dem", "ein", "eine", "einen", "einem", "einer", "eines",
    // Italian
    "il", "lo", "gli", "uno",
    // Portuguese
    "o", "os", "as", "um", "uma", "uns", "umas",
    // Russian prepositions, transliterated
    "v", "vo", "na", "s", "so", "k", "ko", "po", "ot", "iz", "za", "u", "ob",
];

lazy_static! {
    static ref ARTICLE_SET: HashSet<&'static str> = ARTICLES.iter().copied().collect();

    /// First character -> articles starting with it
    static ref ARTICLES_BY_FIRST_CHAR: HashMap<char, Vec<&'static str>> = {
        let mut index: HashMap<char, Vec<&'static str>> = HashMap::new();
        for article in ARTICLES {
            if let Some(first) = article.chars().next() {
                index.entry(first).or_default().push(*article);
            }
        }
        index
    };
}

/// Return `title` without its leading article, or `title` itself when there
/// is none
pub fn sort_title(title: &str) -> &str {
    let Some(first) = title.chars().next() else {
        return title;
    };

    if is_cjk(first) {
        return title;
    }

    let space = match title.find(' ') {
        Some(0) | None => return title,
        Some(idx) => idx,
    };

    let lowered_first = first.to_lowercase().next().unwrap_or(first);
    if !ARTICLES_BY_FIRST_CHAR.contains_key(&lowered_first) {
        return title;
    }

    let candidate = title[..space].to_lowercase();
    if !ARTICLE_SET.contains(candidate.as_str()) {
        return title;
    }

    let remainder = &title[space + 1..];
    if remainder.is_empty() {
        title
    } else {
        remainder
    }
}

/// Han ideographs, Hiragana and Katakana are not space delimited
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'     // Hiragana
        | '\u{30A0}'..='\u{30FF}'   // Katakana
        | '\u{31F0}'..='\u{31FF}'   // Katakana phonetic extensions
        | '\u{3400}'..='\u{4DBF}'   // CJK extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}'   // CJK compatibility ideographs
        | '\u{20000}'..='\u{2A6DF}' // CJK extension B
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_articles_across_languages() {
        assert_eq!(sort_title("The Hobbit"), "Hobbit");
        assert_eq!(sort_title("An Unkindness of Ghosts"), "Unkindness of Ghosts");
        assert_eq!(sort_title("El Principito"), "Principito");
        assert_eq!(sort_title("Les Misérables"), "Misérables");
        assert_eq!(sort_title("Der Prozess"), "Prozess");
        assert_eq!(sort_title("Il nome della rosa"), "nome della rosa");
        assert_eq!(sort_title("Os Lusíadas"), "Lusíadas");
        assert_eq!(sort_title("Na Drugom Beregu"), "Drugom Beregu");
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(sort_title("THE Stand"), "Stand");
        assert_eq!(sort_title("the stand"), "stand");
    }

    #[test]
    fn test_only_one_article_is_removed() {
        assert_eq!(sort_title("The The Band"), "The Band");
    }

    #[test]
    fn test_cjk_titles_are_untouched() {
        assert_eq!(sort_title("進撃の巨人 The Final"), "進撃の巨人 The Final");
        assert_eq!(sort_title("ワンピース 1"), "ワンピース 1");
        assert_eq!(sort_title("ひだまり スケッチ"), "ひだまり スケッチ");
    }

    #[test]
    fn test_no_space_or_leading_space() {
        assert_eq!(sort_title(""), "");
        assert_eq!(sort_title("The"), "The");
        assert_eq!(sort_title("Theology"), "Theology");
        assert_eq!(sort_title(" The Hobbit"), " The Hobbit");
    }

    #[test]
    fn test_empty_remainder_keeps_title() {
        assert_eq!(sort_title("The "), "The ");
    }

    #[test]
    fn test_non_article_first_token() {
        // starts with an indexed character but is not an article
        assert_eq!(sort_title("Thermal Physics"), "Thermal Physics");
        assert_eq!(sort_title("Anathem Deluxe"), "Anathem Deluxe");
        // first character not indexed at all
        assert_eq!(sort_title("Xenocide Reborn"), "Xenocide Reborn");
        assert_eq!(sort_title("1984 Annotated"), "1984 Annotated");
    }
}
