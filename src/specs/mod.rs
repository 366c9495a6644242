// src/specs/mod.rs
//! # Table “specs” module
//!
//! One spec per raw boxscore table kind. Each spec encodes *which columns hold
//! the ground truth* and *how a row becomes a record*.
//!
//! ## What lives here
//! - **Row shaping** for batting (`HITTERS`) and pitching (`PITCHERS`) tables.
//! - **Derived fields**: position and name split, pinch-hitter lead-ins,
//!   SB attribution, win/save flags, outs, WH.
//! - **Column lookup** by header name, so column order in the scraped table
//!   doesn't matter.
//!
//! ## What does **not** live here
//! - **Bundle layout** (which slot is which side): `bundle` validates that.
//! - **Game id decoding and day concatenation**: `parse`.
//! - **Persistence**: `store` / `file`.
//!
//! ## Conventions & invariants
//! - One call handles one team side; records come out in table row order.
//! - A missing column fails the whole table with `MissingColumn`; a cell that
//!   isn't a non-negative integer fails with `InvalidStat`.
pub mod batting;
pub mod pitching;

pub use batting::build_batters;
pub use pitching::build_pitchers;

use crate::bundle::RawTable;
use crate::error::{ParseError, Result};

/// Team and date stamped on every record from one side of one game.
#[derive(Clone, Copy, Debug)]
pub struct SideContext<'a> {
    pub team: &'a str,
    pub date: &'a str,
}

/// Resolved column positions for one table; lookups happen once per table.
pub(crate) struct Columns<'t> {
    table: &'t RawTable,
    kind: &'static str,
}

impl<'t> Columns<'t> {
    pub(crate) fn new(table: &'t RawTable, kind: &'static str) -> Self {
        Self { table, kind }
    }

    pub(crate) fn index(&self, name: &str) -> Result<usize> {
        self.table.column(name).ok_or_else(|| self.missing(name))
    }

    fn missing(&self, name: &str) -> ParseError {
        ParseError::MissingColumn { table: s!(self.kind), column: s!(name) }
    }

    /// Text cell; short rows count as a missing column.
    pub(crate) fn text<'r>(&self, row: &'r [String], col: usize) -> Result<&'r str> {
        row.get(col)
            .map(String::as_str)
            .ok_or_else(|| self.missing(self.table.headers[col].trim()))
    }

    /// Non-negative integer cell. Accepts `3.0`, the way a numeric table
    /// reader renders whole numbers.
    pub(crate) fn stat(&self, row: &[String], col: usize) -> Result<u32> {
        let raw = self.text(row, col)?.trim();
        let bad = || ParseError::InvalidStat {
            table: s!(self.kind),
            column: self.table.headers[col].trim().to_string(),
            value: s!(raw),
        };
        if let Ok(v) = raw.parse::<u32>() {
            return Ok(v);
        }
        match raw.parse::<f64>() {
            Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
            _ => Err(bad()),
        }
    }
}
