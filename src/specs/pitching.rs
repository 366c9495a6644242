// src/specs/pitching.rs
//! Pitching tables: `PITCHERS` holds the name plus an optional decision
//! annotation, e.g. `"J. Doe (W, 5-2)"`, `"K. Roe (S, 12)"`, `"L. Poe (L, 0-1)"`.
use crate::bundle::RawTable;
use crate::config::consts::{
    EARNED_RUNS_COL, HITS_COL, IP_COL, PITCHERS_COL, SAVE_MARKER, STRIKEOUTS_COL, WALKS_COL,
    WIN_MARKER,
};
use crate::core::parse_innings;
use crate::core::sanitize::normalize_ws;
use crate::error::{ParseError, Result};
use crate::records::PitcherRecord;

use super::{Columns, SideContext};

/// Turn one side's pitching table into records, in row order.
pub fn build_pitchers(table: &RawTable, ctx: SideContext<'_>) -> Result<Vec<PitcherRecord>> {
    let cols = Columns::new(table, "pitching");
    let pitchers = cols.index(PITCHERS_COL)?;
    let ip = cols.index(IP_COL)?;
    let h = cols.index(HITS_COL)?;
    let bb = cols.index(WALKS_COL)?;
    let er = cols.index(EARNED_RUNS_COL)?;
    let so = cols.index(STRIKEOUTS_COL)?;

    let mut out = Vec::with_capacity(table.len());
    for row in &table.rows {
        let text = normalize_ws(cols.text(row, pitchers)?);
        let (hits, walks) = (cols.stat(row, h)?, cols.stat(row, bb)?);
        let wh = hits.checked_add(walks).ok_or_else(|| ParseError::InvalidStat {
            table: s!("pitching"),
            column: s!("H+BB"),
            value: format!("{hits}+{walks}"),
        })?;
        out.push(PitcherRecord {
            name: pitcher_name(&text),
            team: s!(ctx.team),
            date: s!(ctx.date),
            wins: win_value(&text),
            saves: save_value(&text),
            outs: parse_innings(cols.text(row, ip)?)?,
            er: cols.stat(row, er)?,
            wh,
            so: cols.stat(row, so)?,
        });
    }
    Ok(out)
}

pub fn win_value(text: &str) -> u32 {
    u32::from(text.contains(WIN_MARKER))
}

pub fn save_value(text: &str) -> u32 {
    u32::from(text.contains(SAVE_MARKER))
}

/// Text before the first `(`, trimmed: `"J. Doe (W, 5-2)"` → `"J. Doe"`.
pub fn pitcher_name(text: &str) -> String {
    let head = match text.find('(') {
        Some(i) => &text[..i],
        None => text,
    };
    head.trim().to_string()
}
