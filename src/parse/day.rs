// src/parse/day.rs
use std::{
    thread,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use serde::Serialize;

use crate::{
    bundle::RawBoxscoreBundle,
    config::options::ParseOptions,
    error::{ParseError, Result},
    progress::Progress,
    records::{BatterRecord, ParsedGame, PitcherRecord},
};

use super::parse_game;

/// A game that could not be parsed, by its position in the submitted order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFailure {
    pub index: usize,
    pub game_id: String,
    pub error: ParseError,
}

/// All batters and pitchers for a day, in game order then away/home order.
/// Failed games are listed separately; the caller decides whether a partial
/// day is good enough.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DayRecords {
    pub batters: Vec<BatterRecord>,
    pub pitchers: Vec<PitcherRecord>,
    #[serde(skip)]
    pub failures: Vec<GameFailure>,
    #[serde(skip)]
    pub games: usize,
}

impl DayRecords {
    fn push(&mut self, index: usize, game_id: &str, parsed: Result<ParsedGame>) {
        match parsed {
            Ok(mut game) => {
                self.batters.append(&mut game.batters);
                self.pitchers.append(&mut game.pitchers);
                self.games += 1;
            }
            Err(error) => self.failures.push(GameFailure { index, game_id: s!(game_id), error }),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse every bundle in order on the calling thread.
pub fn aggregate_day(bundles: &[RawBoxscoreBundle]) -> DayRecords {
    aggregate_day_with(bundles, &ParseOptions::sequential(), None)
}

/// Parse a day's bundles, on `opts.workers` threads when that is more than one.
/// Output order is always the submitted order.
pub fn aggregate_day_with(
    bundles: &[RawBoxscoreBundle],
    opts: &ParseOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> DayRecords {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(bundles.len());
    }

    let workers = opts.workers.min(bundles.len()).max(1);
    let mut per_game: Vec<(usize, Result<ParsedGame>)> = if workers == 1 {
        bundles
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let parsed = parse_game(b);
                report(progress.as_deref_mut(), i, b, &parsed);
                (i, parsed)
            })
            .collect()
    } else {
        parse_on_workers(bundles, workers, progress.as_deref_mut())
    };

    // Reassemble in submission order
    per_game.sort_by_key(|(i, _)| *i);
    let mut day = DayRecords::default();
    for (i, parsed) in per_game {
        day.push(i, &bundles[i].game_id, parsed);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    day
}

fn parse_on_workers(
    bundles: &[RawBoxscoreBundle],
    workers: usize,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<(usize, Result<ParsedGame>)> {
    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<ParsedGame>)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= bundles.len() {
                        break;
                    }
                    if tx.send((i, parse_game(&bundles[i]))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        let mut out = Vec::with_capacity(bundles.len());
        for (i, parsed) in res_rx.iter() {
            report(progress.as_deref_mut(), i, &bundles[i], &parsed);
            out.push((i, parsed));
        }
        out
    })
}

fn report(
    progress: Option<&mut (dyn Progress + '_)>,
    index: usize,
    bundle: &RawBoxscoreBundle,
    parsed: &Result<ParsedGame>,
) {
    if let Err(e) = parsed {
        loge!("Game #{index} {}: {e}", bundle.game_id);
    }
    let Some(p) = progress else { return };
    match parsed {
        Ok(_) => p.item_done(index, &bundle.game_id),
        Err(e) => p.item_failed(index, &bundle.game_id, &e.to_string()),
    }
}
