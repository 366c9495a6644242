// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong turning one raw boxscore into records.
/// Each variant is fatal for its game only; the day aggregator keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed game id {game_id:?}: {reason}")]
    MalformedGameId { game_id: String, reason: String },

    #[error("Missing column {column:?} in {table} table")]
    MissingColumn { table: String, column: String },

    #[error("Unexpected stolen-base panel count: {0} (at most 2)")]
    UnexpectedStolenBaseShape(usize),

    #[error("Invalid innings pitched value {0:?}")]
    InvalidInnings(String),

    #[error("Invalid {column} value {value:?} in {table} table")]
    InvalidStat { table: String, column: String, value: String },

    #[error("Expected {expected} raw tables, found {found}")]
    TableCount { expected: usize, found: usize },

    #[error("Table slot {slot} should be a {expected} table")]
    TableOrder { slot: usize, expected: String },
}

impl ParseError {
    pub(crate) fn game_id(game_id: &str, reason: &str) -> Self {
        ParseError::MalformedGameId { game_id: s!(game_id), reason: s!(reason) }
    }
}

/// Persistence-side failures (reading bundles, writing day files).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("JSON error in {}: {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Whole-run failures for the binary.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No boxscore bundles to parse")]
    NoInputs,

    #[error("{failed} of {total} game(s) failed to parse; nothing written")]
    Incomplete { failed: usize, total: usize },
}
