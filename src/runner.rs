// src/runner.rs
use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};

use crate::{
    config::consts::RECORD_DATE_FMT,
    config::options::RunOptions,
    core::PlayerIndex,
    error::RunError,
    file::export_day,
    parse::{DayRecords, GameFailure, aggregate_day_with},
    progress::Progress,
    store,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub date: NaiveDate,
    pub games: usize,
    pub failures: Vec<GameFailure>,
    pub duplicate_names: Vec<String>,
    pub files_written: Vec<PathBuf>,
}

/// Load bundles, parse the day, write it out.
/// `progress` can be None (no updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let bundles = store::load_all_bundles(&opts.inputs)?;
    if bundles.is_empty() {
        return Err(RunError::NoInputs);
    }

    let duplicate_names = if opts.check_duplicates {
        let index = PlayerIndex::from_links(bundles.iter().flat_map(|b| b.players.iter()));
        let dups = index.duplicate_names();
        for name in &dups {
            logw!("Display name {name:?} is shared by more than one player");
        }
        dups
    } else {
        Vec::new()
    };

    let day = aggregate_day_with(&bundles, &opts.parse, progress);

    if opts.strict && !day.is_complete() {
        return Err(RunError::Incomplete { failed: day.failures.len(), total: bundles.len() });
    }

    let date = opts.export.date.unwrap_or_else(|| day_of(&day));
    let files_written = export_day(&opts.export, date, &day)?;

    Ok(RunSummary {
        date,
        games: day.games,
        failures: day.failures,
        duplicate_names,
        files_written,
    })
}

/// The date the records carry, else yesterday (games are scraped the morning after).
fn day_of(day: &DayRecords) -> NaiveDate {
    day.batters
        .iter()
        .map(|b| b.date.as_str())
        .chain(day.pitchers.iter().map(|p| p.date.as_str()))
        .find_map(|d| NaiveDate::parse_from_str(d, RECORD_DATE_FMT).ok())
        .unwrap_or_else(yesterday)
}

fn yesterday() -> NaiveDate {
    let today = Local::now().date_naive();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}
