//! Age rating labels as written in ComicInfo.xml

use serde::{Deserialize, Serialize};

/// Closed set of age ratings
///
/// `Unknown` stands in for any label that is not in the table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AgeRating {
    #[default]
    Unknown,
    RatingPending,
    EarlyChildhood,
    Everyone,
    G,
    Everyone10Plus,
    PG,
    KidsToAdults,
    Teen,
    MA15Plus,
    Mature17Plus,
    M,
    R18Plus,
    AdultsOnly18Plus,
    X18Plus,
}

impl AgeRating {
    /// Every rating, `Unknown` first
    pub const ALL: [AgeRating; 15] = [
        AgeRating::Unknown,
        AgeRating::RatingPending,
        AgeRating::EarlyChildhood,
        AgeRating::Everyone,
        AgeRating::G,
        AgeRating::Everyone10Plus,
        AgeRating::PG,
        AgeRating::KidsToAdults,
        AgeRating::Teen,
        AgeRating::MA15Plus,
        AgeRating::Mature17Plus,
        AgeRating::M,
        AgeRating::R18Plus,
        AgeRating::AdultsOnly18Plus,
        AgeRating::X18Plus,
    ];

    /// The label as it appears in embedded metadata
    pub fn label(&self) -> &'static str {
        match self {
            AgeRating::Unknown => "Unknown",
            AgeRating::RatingPending => "Rating Pending",
            AgeRating::EarlyChildhood => "Early Childhood",
            AgeRating::Everyone => "Everyone",
            AgeRating::G => "G",
            AgeRating::Everyone10Plus => "Everyone 10+",
            AgeRating::PG => "PG",
            AgeRating::KidsToAdults => "Kids to Adults",
            AgeRating::Teen => "Teen",
            AgeRating::MA15Plus => "MA15+",
            AgeRating::Mature17Plus => "Mature 17+",
            AgeRating::M => "M",
            AgeRating::R18Plus => "R18+",
            AgeRating::AdultsOnly18Plus => "Adults Only 18+",
            AgeRating::X18Plus => "X18+",
        }
    }
}
