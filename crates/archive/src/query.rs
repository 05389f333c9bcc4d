use crate::film::Film;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Year,
    Title,
    Period,
}

impl SortKey {
    /// Presentation order of the sort controls.
    pub const ALL: [SortKey; 4] = [SortKey::Rating, SortKey::Year, SortKey::Title, SortKey::Period];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Top Rated",
            SortKey::Year => "Newest",
            SortKey::Title => "A-Z",
            SortKey::Period => "War Period",
        }
    }
}

/// Search and sort criteria applied to the film list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmQuery {
    pub search: String,
    pub sort: SortKey,
}

impl Default for FilmQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::Rating,
        }
    }
}

impl FilmQuery {
    pub fn apply(&self, films: &[Film]) -> Vec<Film> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<Film> = films
            .iter()
            .filter(|film| needle.is_empty() || matches_search(film, &needle))
            .cloned()
            .collect();

        // Stable sort: ties keep archive order.
        match self.sort {
            SortKey::Rating => out.sort_by(|a, b| {
                b.imdb_rating
                    .partial_cmp(&a.imdb_rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Year => out.sort_by(|a, b| b.year.cmp(&a.year)),
            SortKey::Title => out.sort_by(|a, b| a.title.en.cmp(&b.title.en)),
            SortKey::Period => out.sort_by(|a, b| a.event_years.start.cmp(&b.event_years.start)),
        }

        out
    }
}

fn matches_search(film: &Film, needle: &str) -> bool {
    film.title.en.to_lowercase().contains(needle)
        || film.title.es.to_lowercase().contains(needle)
        || film.synopsis.en.to_lowercase().contains(needle)
        || film.synopsis.es.to_lowercase().contains(needle)
        || film.country.to_lowercase().contains(needle)
}
