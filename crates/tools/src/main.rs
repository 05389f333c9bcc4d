use std::env;
use std::fs;
use std::path::PathBuf;

use archive::{EventArchive, FilmArchive, war_periods};
use serde::Serialize;
use timeline::{PositionedEvent, PositionedFilm, TimelineScene};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "validate" => cmd_validate(args),
        "layout" => cmd_layout(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    [
        "usage:",
        "  filmatlas validate <films.json> <events.json>",
        "  filmatlas layout <films.json> <events.json> [--period N]",
        "",
        "env:",
        "  FILMATLAS_PERIOD  default period index for layout (0-based)",
    ]
    .join("\n")
}

fn cmd_validate(args: Vec<String>) -> Result<(), String> {
    let (films, events) = load_archives(&args)?;
    println!(
        "ok: {} films, {} events",
        films.films.len(),
        events.events.len()
    );
    Ok(())
}

fn cmd_layout(args: Vec<String>) -> Result<(), String> {
    if args.len() < 2 {
        return Err(usage());
    }

    let mut period_index = env_period_default()?;
    let mut paths: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--period" => {
                i += 1;
                if i >= args.len() {
                    return Err("--period requires a value".to_string());
                }
                period_index = args[i]
                    .parse::<usize>()
                    .map_err(|e| format!("invalid --period value: {e}"))?;
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => paths.push(args[i].clone()),
        }
        i += 1;
    }

    let (films, events) = load_archives(&paths)?;

    let periods = war_periods();
    if period_index >= periods.len() {
        return Err(format!(
            "period index {period_index} out of range (0..{})",
            periods.len() - 1
        ));
    }

    let mut scene = TimelineScene::new(periods);
    scene.current_period = period_index;
    scene.events = events.events;
    scene.films = films.films;

    let snapshot = scene.snapshot();
    info!(
        period = period_index,
        events = snapshot.events.len(),
        films = snapshot.films.len(),
        "laid out timeline"
    );

    let axis = scene.axis();
    let window = axis.window();
    let year_ticks: Vec<YearTick> = window
        .years()
        .map(|year| YearTick {
            year,
            position: axis.year_tick(year),
        })
        .collect();

    let dump = LayoutDump {
        period: scene.periods[period_index].label.clone(),
        start_year: window.start_year,
        end_year: window.end_year,
        year_ticks,
        events: snapshot.events,
        films: snapshot.films,
    };

    let payload = serde_json::to_string_pretty(&dump).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}

fn env_period_default() -> Result<usize, String> {
    let Ok(raw) = env::var("FILMATLAS_PERIOD") else {
        return Ok(0);
    };
    raw.trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid FILMATLAS_PERIOD: {e}"))
}

fn load_archives(paths: &[String]) -> Result<(FilmArchive, EventArchive), String> {
    if paths.len() != 2 {
        return Err(usage());
    }

    let films_path = PathBuf::from(&paths[0]);
    let events_path = PathBuf::from(&paths[1]);

    let films_payload =
        fs::read_to_string(&films_path).map_err(|e| format!("read {films_path:?}: {e}"))?;
    let films =
        FilmArchive::from_json_str(&films_payload).map_err(|e| format!("{films_path:?}: {e}"))?;

    let events_payload =
        fs::read_to_string(&events_path).map_err(|e| format!("read {events_path:?}: {e}"))?;
    let events = EventArchive::from_json_str(&events_payload)
        .map_err(|e| format!("{events_path:?}: {e}"))?;

    Ok((films, events))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct YearTick {
    year: i32,
    position: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDump {
    period: String,
    start_year: i32,
    end_year: i32,
    year_ticks: Vec<YearTick>,
    events: Vec<PositionedEvent>,
    films: Vec<PositionedFilm>,
}
