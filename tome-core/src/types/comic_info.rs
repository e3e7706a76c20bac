//! Raw embedded metadata (ComicInfo.xml or the equivalent from an OPF)
//!
//! Every field is free text and may be empty or malformed. Interpretation
//! into typed values happens in [`crate::metadata`].

use serde::{Deserialize, Deserializer, Serialize};

/// Embedded metadata record, field names following the ComicInfo schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename = "ComicInfo")]
pub struct ComicInfo {
    #[serde(rename = "Series", default)]
    pub series: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    /// Volume, kept as text ("3", "3.5", "")
    #[serde(rename = "Volume", default)]
    pub volume: String,

    /// Issue or chapter number, kept as text
    #[serde(rename = "Number", default)]
    pub number: String,

    /// Total number of items in the series; 0 when not given
    #[serde(rename = "Count", default, deserialize_with = "lenient_int")]
    pub count: i32,

    #[serde(rename = "AgeRating", default)]
    pub age_rating: String,

    /// Commercial identifier (ISBN/EAN)
    #[serde(rename = "GTIN", default)]
    pub gtin: String,

    /// Free-form format hint ("Special", "One-Shot", ...)
    #[serde(rename = "Format", default)]
    pub format: String,

    #[serde(rename = "SeriesSort", default)]
    pub series_sort: String,

    #[serde(rename = "TitleSort", default)]
    pub title_sort: String,

    #[serde(rename = "LocalizedSeries", default)]
    pub localized_series: String,

    #[serde(rename = "Summary", default)]
    pub summary: String,

    #[serde(rename = "LanguageISO", default)]
    pub language_iso: String,

    #[serde(rename = "Publisher", default)]
    pub publisher: String,

    #[serde(rename = "Year", default, deserialize_with = "lenient_int")]
    pub year: i32,

    #[serde(rename = "Month", default, deserialize_with = "lenient_int")]
    pub month: i32,

    #[serde(rename = "Day", default, deserialize_with = "lenient_int")]
    pub day: i32,

    // Creators, comma separated per role
    #[serde(rename = "Writer", default)]
    pub writer: String,

    #[serde(rename = "Penciller", default)]
    pub penciller: String,

    #[serde(rename = "Inker", default)]
    pub inker: String,

    #[serde(rename = "Colorist", default)]
    pub colorist: String,

    #[serde(rename = "Letterer", default)]
    pub letterer: String,

    #[serde(rename = "CoverArtist", default)]
    pub cover_artist: String,

    #[serde(rename = "Editor", default)]
    pub editor: String,

    #[serde(rename = "Translator", default)]
    pub translator: String,
}

/// Role a person played in making the item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    Writer,
    Penciller,
    Inker,
    Colorist,
    Letterer,
    CoverArtist,
    Editor,
    Translator,
}

/// A single creator entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub role: PersonRole,
}

impl ComicInfo {
    /// Create a record with only the series set
    pub fn new(series: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            ..Self::default()
        }
    }

    /// Set the volume
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = volume.into();
        self
    }

    /// Set the issue/chapter number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Deserialize a ComicInfo.xml document
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// Ordered list of creators, role by role, in the order they were written
    pub fn people(&self) -> Vec<Person> {
        let roles = [
            (PersonRole::Writer, &self.writer),
            (PersonRole::Penciller, &self.penciller),
            (PersonRole::Inker, &self.inker),
            (PersonRole::Colorist, &self.colorist),
            (PersonRole::Letterer, &self.letterer),
            (PersonRole::CoverArtist, &self.cover_artist),
            (PersonRole::Editor, &self.editor),
            (PersonRole::Translator, &self.translator),
        ];

        roles
            .into_iter()
            .flat_map(|(role, names)| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(move |name| Person {
                        name: name.to_string(),
                        role,
                    })
            })
            .collect()
    }
}

/// Numeric ComicInfo fields are frequently blank or junk; read them as 0
fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ComicInfo xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Title>The Gunslinger</Title>
  <Series>The Dark Tower</Series>
  <Number>1</Number>
  <Count>7</Count>
  <Volume>1</Volume>
  <Writer>Stephen King, Robin Furth</Writer>
  <Penciller>Jae Lee</Penciller>
  <AgeRating>Mature 17+</AgeRating>
  <GTIN>978-0-306-40615-7</GTIN>
  <Year>2007</Year>
  <Month></Month>
</ComicInfo>"#;

    #[test]
    fn test_from_xml() {
        let info = ComicInfo::from_xml(SAMPLE).unwrap();
        assert_eq!(info.series, "The Dark Tower");
        assert_eq!(info.title, "The Gunslinger");
        assert_eq!(info.number, "1");
        assert_eq!(info.volume, "1");
        assert_eq!(info.count, 7);
        assert_eq!(info.year, 2007);
        assert_eq!(info.month, 0);
        assert_eq!(info.age_rating, "Mature 17+");
        assert_eq!(info.gtin, "978-0-306-40615-7");
        assert!(info.summary.is_empty());
    }

    #[test]
    fn test_from_xml_tolerates_junk_numbers() {
        let xml = "<ComicInfo><Series>X</Series><Count>seven</Count></ComicInfo>";
        let info = ComicInfo::from_xml(xml).unwrap();
        assert_eq!(info.series, "X");
        assert_eq!(info.count, 0);
    }

    #[test]
    fn test_people_keeps_order() {
        let info = ComicInfo::from_xml(SAMPLE).unwrap();
        let people = info.people();
        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "Stephen King");
        assert_eq!(people[1].name, "Robin Furth");
        assert_eq!(people[1].role, PersonRole::Writer);
        assert_eq!(people[2].name, "Jae Lee");
        assert_eq!(people[2].role, PersonRole::Penciller);
    }
}
