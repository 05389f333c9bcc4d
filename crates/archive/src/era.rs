use chronology::TimelinePeriod;

use crate::film::{Film, YearSpan};

/// First and last calendar years covered by the archive data.
pub const ERA_START: i32 = 1936;
pub const ERA_END: i32 = 1945;

/// The period navigation table the timeline cycles through.
pub fn war_periods() -> Vec<TimelinePeriod> {
    vec![
        TimelinePeriod::new("Prelude to War", 1936, 1938),
        TimelinePeriod::new("Early War", 1939, 1941),
        TimelinePeriod::new("Turning Point", 1942, 1943),
        TimelinePeriod::new("Road to Victory", 1944, 1945),
    ]
}

/// User-adjustable year range, clamped to the archive era.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EraRange {
    pub start: i32,
    pub end: i32,
}

impl Default for EraRange {
    fn default() -> Self {
        Self {
            start: ERA_START,
            end: ERA_END,
        }
    }
}

impl EraRange {
    /// Sets the range, clamping both ends to the era and swapping an
    /// inverted pair.
    pub fn set(&mut self, start: i32, end: i32) {
        let start = start.clamp(ERA_START, ERA_END);
        let end = end.clamp(ERA_START, ERA_END);
        if start > end {
            self.start = end;
            self.end = start;
        } else {
            self.start = start;
            self.end = end;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A film is shown when its event years overlap the selected range.
    pub fn overlaps(&self, span: YearSpan) -> bool {
        span.start <= self.end && span.end >= self.start
    }

    pub fn filter_films<'a>(&self, films: &'a [Film]) -> Vec<&'a Film> {
        films
            .iter()
            .filter(|film| self.overlaps(film.event_years))
            .collect()
    }
}
