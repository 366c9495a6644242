// src/parse/mod.rs
mod day;
mod game;

pub use day::{DayRecords, GameFailure, aggregate_day, aggregate_day_with};
pub use game::parse_game;
