// src/lib.rs
//! Boxscore fragments in, per-player day records out.
//!
//! ```text
//! store::load_bundles → parse::aggregate_day → parse::parse_game
//!                                              ↘ specs::{batting, pitching} → core::*
//!                      file::export_day / store::save_day_json
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bundle;
pub mod config;
pub mod core;
pub mod error;
pub mod parse;
pub mod progress;
pub mod records;
pub mod specs;

pub mod file;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use bundle::{RawBoxscoreBundle, RawTable};
pub use error::{ParseError, RunError, StoreError};
pub use parse::{DayRecords, GameFailure, aggregate_day, aggregate_day_with, parse_game};
pub use records::{BatterRecord, ParsedGame, PitcherRecord};
