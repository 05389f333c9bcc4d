use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::HistoricalEvent;
use crate::film::Film;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    Malformed(String),
    InvalidFilm { id: String, reason: String },
    InvalidEvent { id: String, reason: String },
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::Malformed(msg) => write!(f, "malformed archive payload: {msg}"),
            ArchiveError::InvalidFilm { id, reason } => write!(f, "invalid film {id:?}: {reason}"),
            ArchiveError::InvalidEvent { id, reason } => {
                write!(f, "invalid event {id:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ArchiveError {}

/// The `{"films": [...]}` payload of the static film data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmArchive {
    pub films: Vec<Film>,
}

impl FilmArchive {
    /// Parses and validates a film archive.
    ///
    /// Dates are parsed here, at the data boundary; downstream layout code
    /// only ever sees well-formed calendar dates.
    pub fn from_json_str(payload: &str) -> Result<Self, ArchiveError> {
        let archive: FilmArchive =
            serde_json::from_str(payload).map_err(|e| ArchiveError::Malformed(e.to_string()))?;
        archive.validate()?;
        Ok(archive)
    }

    fn validate(&self) -> Result<(), ArchiveError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for film in &self.films {
            if !seen.insert(film.id.as_str()) {
                return Err(ArchiveError::InvalidFilm {
                    id: film.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
            if film.event_years.start > film.event_years.end {
                return Err(ArchiveError::InvalidFilm {
                    id: film.id.clone(),
                    reason: format!(
                        "inverted event year span {}..{}",
                        film.event_years.start, film.event_years.end
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The `{"events": [...]}` payload of the static event data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventArchive {
    pub events: Vec<HistoricalEvent>,
}

impl EventArchive {
    pub fn from_json_str(payload: &str) -> Result<Self, ArchiveError> {
        let archive: EventArchive =
            serde_json::from_str(payload).map_err(|e| ArchiveError::Malformed(e.to_string()))?;
        archive.validate()?;
        Ok(archive)
    }

    fn validate(&self) -> Result<(), ArchiveError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for event in &self.events {
            if !seen.insert(event.id.as_str()) {
                return Err(ArchiveError::InvalidEvent {
                    id: event.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ArchiveError, EventArchive, FilmArchive};

    #[test]
    fn parses_shipped_film_data() {
        let payload = include_str!("../../../assets/films.json");
        let archive = FilmArchive::from_json_str(payload).expect("parse films.json");
        assert_eq!(archive.films.len(), 8);

        let dunkirk = archive
            .films
            .iter()
            .find(|f| f.id == "dunkirk")
            .expect("dunkirk present");
        assert_eq!(dunkirk.event_years.start, 1940);
        assert!(dunkirk.event_date.is_some());
    }

    #[test]
    fn parses_shipped_event_data() {
        let payload = include_str!("../../../assets/events.json");
        let archive = EventArchive::from_json_str(payload).expect("parse events.json");
        assert_eq!(archive.events.len(), 12);
        assert!(archive.events.iter().all(|e| !e.title.is_empty()));
    }

    #[test]
    fn rejects_duplicate_film_ids() {
        let payload = r#"{"films": [
            {"id": "a", "title": {"en": "A", "es": "A"}, "year": 1960,
             "eventYears": {"start": 1940, "end": 1940}, "imdbRating": 7.0,
             "country": "UK", "poster": "", "synopsis": {"en": "", "es": ""},
             "locations": []},
            {"id": "a", "title": {"en": "A2", "es": "A2"}, "year": 1961,
             "eventYears": {"start": 1941, "end": 1941}, "imdbRating": 7.0,
             "country": "UK", "poster": "", "synopsis": {"en": "", "es": ""},
             "locations": []}
        ]}"#;

        let err = FilmArchive::from_json_str(payload).unwrap_err();
        assert_eq!(
            err,
            ArchiveError::InvalidFilm {
                id: "a".to_string(),
                reason: "duplicate id".to_string(),
            }
        );
    }

    #[test]
    fn rejects_inverted_year_span() {
        let payload = r#"{"films": [
            {"id": "a", "title": {"en": "A", "es": "A"}, "year": 1960,
             "eventYears": {"start": 1943, "end": 1941}, "imdbRating": 7.0,
             "country": "UK", "poster": "", "synopsis": {"en": "", "es": ""},
             "locations": []}
        ]}"#;

        let err = FilmArchive::from_json_str(payload).unwrap_err();
        assert!(matches!(err, ArchiveError::InvalidFilm { .. }));
    }

    #[test]
    fn rejects_malformed_event_date() {
        let payload = r#"{"events": [
            {"id": "e", "date": "not-a-date", "title": "Broken"}
        ]}"#;

        let err = EventArchive::from_json_str(payload).unwrap_err();
        assert!(matches!(err, ArchiveError::Malformed(_)));
    }
}
