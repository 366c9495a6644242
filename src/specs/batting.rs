// src/specs/batting.rs
//! Batting tables: one row per batter, `HITTERS` holds `"<name> <POS>"`,
//! optionally led by a substitution marker like `a-` for pinch hitters.
use crate::bundle::RawTable;
use crate::config::consts::{BATTING_STAT_COLS, HITTERS_COL};
use crate::core::sanitize::{drop_last_token, last_token, normalize_ws};
use crate::core::{Side, resolve_stolen_bases};
use crate::error::Result;
use crate::records::BatterRecord;

use super::{Columns, SideContext};

/// Turn one side's batting table into records, in row order.
pub fn build_batters(
    table: &RawTable,
    side: Side,
    ctx: SideContext<'_>,
    sb_info: &[String],
    sb_headers: &[String],
) -> Result<Vec<BatterRecord>> {
    let cols = Columns::new(table, "batting");
    let hitters = cols.index(HITTERS_COL)?;
    let [ab, r, h, rbi, hr] = BATTING_STAT_COLS.map(|c| cols.index(c));
    let (ab, r, h, rbi, hr) = (ab?, r?, h?, rbi?, hr?);

    let mut out = Vec::with_capacity(table.len());
    for row in &table.rows {
        let hitter = normalize_ws(cols.text(row, hitters)?);
        let name = batter_name(&hitter);
        let sb = resolve_stolen_bases(side, &name, sb_info, sb_headers)?;

        out.push(BatterRecord {
            position: s!(batter_position(&hitter)),
            name,
            team: s!(ctx.team),
            date: s!(ctx.date),
            ab: cols.stat(row, ab)?,
            r: cols.stat(row, r)?,
            h: cols.stat(row, h)?,
            rbi: cols.stat(row, rbi)?,
            hr: cols.stat(row, hr)?,
            sb,
        });
    }
    Ok(out)
}

/// Last token of the `HITTERS` cell: `"a- J. Smith PH"` → `"PH"`.
pub fn batter_position(hitter: &str) -> &str {
    last_token(hitter)
}

/// `"a- J. Smith PH"` → `"J. Smith"`.
pub fn batter_name(hitter: &str) -> String {
    s!(drop_last_token(strip_pinch_lead(hitter)))
}

/// Drop a leading substitution marker token (one ending in `-`).
fn strip_pinch_lead(hitter: &str) -> &str {
    match hitter.split_once(' ') {
        Some((first, rest)) if first.ends_with('-') => rest,
        _ => hitter,
    }
}
