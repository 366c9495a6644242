// src/core/steals.rs
//! Stolen-base attribution.
//!
//! Boxscores don't carry a per-player SB column. Instead each team that stole
//! a base gets a free-text "BASERUNNING" panel naming its runners, e.g.
//! `SB: J. Smith 2 (5, 2nd base off ...), T. Jones (1, ...)`. When both teams
//! stole there are two panels in away/home order. When only one did there is
//! a single panel, and the only clue to its owner is whether the page carried
//! header markers for that panel block: no markers means the home side,
//! markers mean the away side.
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// Which team-side table a row came from. Slot order in a bundle is always
/// away first, home second, for batting and pitching alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Away, Side::Home];

    pub fn index(self) -> usize {
        match self {
            Side::Away => 0,
            Side::Home => 1,
        }
    }

    /// Pick this side's half of an (away, home) pair.
    pub fn pick<T>(self, pair: &(T, T)) -> &T {
        match self {
            Side::Away => &pair.0,
            Side::Home => &pair.1,
        }
    }
}

/// SB count for `person` (display name, no position token) batting for `side`.
pub fn resolve_stolen_bases<S, H>(
    side: Side,
    person: &str,
    sb_info: &[S],
    sb_headers: &[H],
) -> Result<u32>
where
    S: AsRef<str>,
{
    match panel_for_side(side, sb_info, sb_headers)? {
        Some(panel) => Ok(count_in_panel(panel, person)),
        None => Ok(0),
    }
}

/// The panel listing `side`'s steals, if that side has one.
pub fn panel_for_side<'a, S, H>(
    side: Side,
    sb_info: &'a [S],
    sb_headers: &[H],
) -> Result<Option<&'a str>>
where
    S: AsRef<str>,
{
    let panel = match (sb_info.len(), side) {
        (0, _) => None,
        (1, Side::Home) if sb_headers.is_empty() => Some(&sb_info[0]),
        (1, Side::Away) if !sb_headers.is_empty() => Some(&sb_info[0]),
        (1, _) => None,
        (2, side) => Some(&sb_info[side.index()]),
        (n, _) => return Err(ParseError::UnexpectedStolenBaseShape(n)),
    };
    Ok(panel.map(|p| p.as_ref()))
}

/// 0 when `person` isn't in the panel. Otherwise the digit right after the
/// first mention (spaces skipped), or 1 when no digit follows.
pub fn count_in_panel(panel: &str, person: &str) -> u32 {
    if person.is_empty() {
        return 0;
    }
    let Some(at) = panel.find(person) else {
        return 0;
    };
    let rest = panel[at + person.len()..].trim_start();
    rest.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(1)
}
