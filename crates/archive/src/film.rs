use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Title/synopsis strings shipped in both data languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub es: String,
}

/// Inclusive whole-year range the depicted events cover.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpan {
    pub start: i32,
    pub end: i32,
}

impl YearSpan {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn single(year: i32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Region,
    Country,
}

/// A place the film is tied to, consumed by the external map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    /// `[longitude, latitude]` in degrees.
    pub coordinates: [f64; 2],
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub title: LocalizedText,
    /// Production year, distinct from the years the film depicts.
    pub year: i32,
    pub event_years: YearSpan,
    /// Overrides the computed span midpoint when the film depicts one event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    pub imdb_rating: f64,
    pub country: String,
    pub poster: String,
    pub synopsis: LocalizedText,
    pub locations: Vec<Location>,
}
