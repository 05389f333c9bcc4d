use archive::{Film, HistoricalEvent};
use chrono::NaiveDate;
use chronology::{PeriodWindow, TimelinePeriod, year_span_anchor};
use serde::Serialize;

use crate::axis::TimelineAxis;
use crate::stack::{AxisCard, StackConfig, Stacked, stack_cards};

/// An event with its resolved axis position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    #[serde(flatten)]
    pub event: HistoricalEvent,
    pub position: f64,
}

impl AxisCard for EventCard {
    fn position(&self) -> f64 {
        self.position
    }
}

/// A film with the date it was positioned by and its axis position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmCard {
    #[serde(flatten)]
    pub film: Film,
    /// The date layout actually used, whether supplied or computed.
    pub display_event_date: NaiveDate,
    pub position: f64,
}

impl AxisCard for FilmCard {
    fn position(&self) -> f64 {
        self.position
    }
}

pub type PositionedEvent = Stacked<EventCard>;
pub type PositionedFilm = Stacked<FilmCard>;

/// The single date a film is positioned by: the explicit event date when the
/// record carries one, otherwise an anchor inside its event-year span.
pub fn display_event_date(film: &Film) -> NaiveDate {
    match film.event_date {
        Some(date) => date,
        None => year_span_anchor(film.event_years.start, film.event_years.end),
    }
}

pub fn position_events(
    axis: &TimelineAxis,
    events: &[HistoricalEvent],
    config: &StackConfig,
) -> Vec<PositionedEvent> {
    let cards: Vec<EventCard> = events
        .iter()
        .filter_map(|event| {
            let position = axis.position_of(event.date)?;
            Some(EventCard {
                event: event.clone(),
                position,
            })
        })
        .collect();
    stack_cards(cards, config)
}

pub fn position_films(
    axis: &TimelineAxis,
    films: &[Film],
    config: &StackConfig,
) -> Vec<PositionedFilm> {
    let cards: Vec<FilmCard> = films
        .iter()
        .filter_map(|film| {
            let date = display_event_date(film);
            let position = axis.position_of(date)?;
            Some(FilmCard {
                film: film.clone(),
                display_event_date: date,
                position,
            })
        })
        .collect();
    stack_cards(cards, config)
}

/// Timeline inputs plus the explicit recompute entry point.
///
/// There is no internal caching or change tracking: the owner calls
/// [`TimelineScene::snapshot`] again whenever the period index or either
/// collection changes, and every call is a fresh, total pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineScene {
    pub periods: Vec<TimelinePeriod>,
    pub current_period: usize,
    pub events: Vec<HistoricalEvent>,
    pub films: Vec<Film>,
    pub stacking: StackConfig,
}

impl TimelineScene {
    pub fn new(periods: Vec<TimelinePeriod>) -> Self {
        Self {
            periods,
            current_period: 0,
            events: Vec::new(),
            films: Vec::new(),
            stacking: StackConfig::default(),
        }
    }

    /// Window of the selected period. Panics on an out-of-range index.
    pub fn window(&self) -> PeriodWindow {
        PeriodWindow::resolve(&self.periods, self.current_period)
    }

    pub fn axis(&self) -> TimelineAxis {
        TimelineAxis::new(self.window())
    }

    pub fn snapshot(&self) -> TimelineSnapshot {
        let axis = self.axis();
        TimelineSnapshot {
            events: position_events(&axis, &self.events, &self.stacking),
            films: position_films(&axis, &self.films, &self.stacking),
        }
    }
}

/// Everything the card-rendering layer needs, with no further layout work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSnapshot {
    pub events: Vec<PositionedEvent>,
    pub films: Vec<PositionedFilm>,
}
