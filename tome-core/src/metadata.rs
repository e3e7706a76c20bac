//! Interpretation of raw embedded metadata into typed values
//!
//! Nothing here fails: unknown ratings become [`AgeRating::Unknown`], bad
//! identifiers become empty strings and junk numbers become 0.

use crate::identifiers;
use crate::types::{AgeRating, ComicInfo, Person};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// Uppercased label -> rating
    static ref AGE_RATINGS: HashMap<String, AgeRating> = AgeRating::ALL
        .iter()
        .map(|rating| (rating.label().to_uppercase(), *rating))
        .collect();
}

/// Embedded metadata after interpretation, attached to the parse result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InterpretedMetadata {
    /// Trimmed series name
    pub series: String,
    pub title: String,
    pub volume: String,
    pub number: String,

    /// Series total as written in the record
    pub count: i32,

    /// Whole-number ordinal of this item, see [`calculated_count`]
    pub calculated_count: i32,

    pub age_rating: AgeRating,

    /// Validated ISBN/GTIN or empty
    pub isbn: String,

    /// Raw format hint ("Special", "One-Shot", ...)
    pub format: String,

    pub series_sort: String,
    pub localized_series: String,
    pub summary: String,
    pub language: String,
    pub publisher: String,
    pub release_date: Option<NaiveDate>,
    pub people: Vec<Person>,
}

impl InterpretedMetadata {
    /// Whether this item claims to be the final entry of its series
    pub fn is_last_in_series(&self) -> bool {
        self.count > 0 && self.calculated_count == self.count
    }
}

/// Interpret a raw record
pub fn interpret(info: &ComicInfo) -> InterpretedMetadata {
    let series_sort = if info.series_sort.trim().is_empty() {
        info.title_sort.trim()
    } else {
        info.series_sort.trim()
    };

    InterpretedMetadata {
        series: info.series.trim().to_string(),
        title: info.title.trim().to_string(),
        volume: info.volume.trim().to_string(),
        number: info.number.trim().to_string(),
        count: info.count,
        calculated_count: calculated_count(&info.number, &info.volume, info.count),
        age_rating: convert_age_rating(&info.age_rating),
        isbn: extract_identifier(&info.gtin),
        format: info.format.trim().to_string(),
        series_sort: series_sort.to_string(),
        localized_series: info.localized_series.trim().to_string(),
        summary: info.summary.trim().to_string(),
        language: info.language_iso.trim().to_string(),
        publisher: info.publisher.trim().to_string(),
        release_date: release_date(info.year, info.month, info.day),
        people: info.people(),
    }
}

/// Map an age-rating label to its enum value
///
/// Case-insensitive, exact. Anything else (including empty) is `Unknown`.
pub fn convert_age_rating(label: &str) -> AgeRating {
    if label.is_empty() {
        return AgeRating::Unknown;
    }

    AGE_RATINGS
        .get(&label.to_uppercase())
        .copied()
        .unwrap_or(AgeRating::Unknown)
}

/// Effective ordinal of an item: the integer part of `number`
///
/// `volume` and `count` do not change the result; `count` is the series total
/// a caller may compare the ordinal against. When `number` is not a number
/// the integer part of `volume` is used, and 0 when neither parses.
pub fn calculated_count(number: &str, volume: &str, _count: i32) -> i32 {
    parse_ordinal(number)
        .or_else(|| parse_ordinal(volume))
        .unwrap_or(0)
}

/// Trim and validate a commercial identifier
pub fn extract_identifier(raw: &str) -> String {
    identifiers::validate(raw.trim())
}

fn parse_ordinal(value: &str) -> Option<i32> {
    let parsed: f64 = value.trim().parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.trunc() as i32)
}

fn release_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    if year <= 0 {
        return None;
    }
    let month = u32::try_from(month.max(1)).ok()?;
    let day = u32::try_from(day.max(1)).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
