use chrono::{Datelike, NaiveDate};
use chronology::{PeriodWindow, days_between, year_start};

/// Left/right margin of the drawable axis, percent.
pub const AXIS_MARGIN_PCT: f64 = 5.0;
/// Usable width between the margins, percent.
pub const AXIS_SPAN_PCT: f64 = 90.0;

/// Maps calendar dates onto the horizontal axis of one period window.
///
/// Interpolation is day-resolution, not year-resolution, so two dates in the
/// same year but different months land on distinguishable positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimelineAxis {
    window: PeriodWindow,
}

impl TimelineAxis {
    pub fn new(window: PeriodWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> PeriodWindow {
        self.window
    }

    /// Axis position for `date`, or `None` when its year falls outside the
    /// window and the caller must drop it from layout.
    pub fn position_of(&self, date: NaiveDate) -> Option<f64> {
        if !self.window.contains_year(date.year()) {
            return None;
        }
        Some(self.interpolate(date))
    }

    /// Tick position for January 1 of `year`.
    ///
    /// No window membership check: callers only ask for years inside or
    /// directly adjacent to the window.
    pub fn year_tick(&self, year: i32) -> f64 {
        self.interpolate(year_start(year))
    }

    fn interpolate(&self, date: NaiveDate) -> f64 {
        // One day past the window, so the span covers whole years in days.
        let range_start = year_start(self.window.start_year);
        let range_end = year_start(self.window.end_year + 1);

        let total_days = days_between(range_start, range_end) as f64;
        let days_from_start = days_between(range_start, date) as f64;

        AXIS_MARGIN_PCT + days_from_start / total_days * AXIS_SPAN_PCT
    }
}
