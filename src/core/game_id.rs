// src/core/game_id.rs
use chrono::NaiveDate;

use crate::config::consts::{GAME_ID_DATE_FMT, GAME_ID_SEP, RECORD_DATE_FMT, TEAMS_SEP};
use crate::error::{ParseError, Result};

/// Date and matchup decoded from a game id like `MLB_20230403_NYM@MIL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameIdentity {
    pub date: NaiveDate,
    /// (away, home)
    pub teams: (String, String),
}

impl GameIdentity {
    /// `MM/DD/YYYY`, the form stamped on every record.
    pub fn date_str(&self) -> String {
        self.date.format(RECORD_DATE_FMT).to_string()
    }

    pub fn away(&self) -> &str { &self.teams.0 }
    pub fn home(&self) -> &str { &self.teams.1 }
}

/// Second-to-last `_` segment is the `YYYYMMDD` date, last is `AWAY@HOME`.
/// Anything in front of those two is ignored.
pub fn parse_game_id(game_id: &str) -> Result<GameIdentity> {
    let parts: Vec<&str> = game_id.split(GAME_ID_SEP).collect();
    if parts.len() < 2 {
        return Err(ParseError::game_id(game_id, "expected <date>_<AWAY>@<HOME>"));
    }
    let date_part = parts[parts.len() - 2];
    let teams_part = parts[parts.len() - 1];

    if date_part.len() != 8 || !date_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::game_id(game_id, "date segment is not YYYYMMDD"));
    }
    let date = NaiveDate::parse_from_str(date_part, GAME_ID_DATE_FMT)
        .map_err(|_| ParseError::game_id(game_id, "date segment is not a calendar date"))?;

    let (away, home) = teams_part
        .split_once(TEAMS_SEP)
        .ok_or_else(|| ParseError::game_id(game_id, "team segment lacks '@'"))?;
    if away.is_empty() || home.is_empty() || home.contains(TEAMS_SEP) {
        return Err(ParseError::game_id(game_id, "team segment is not AWAY@HOME"));
    }

    Ok(GameIdentity { date, teams: (s!(away), s!(home)) })
}
