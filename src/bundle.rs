// src/bundle.rs
//! What the retrieval side hands over for one game: four extracted tables
//! plus the stolen-base text fragments. Cells stay as text; the builders in
//! `specs` decide what is numeric.
use serde::{Deserialize, Serialize};

use crate::config::consts::{BATTING_SLOT, HITTERS_COL, PITCHERS_COL, PITCHING_SLOT, TABLE_SLOTS};
use crate::core::Side;
use crate::error::{ParseError, Result};

/// One extracted table: header row plus text cells, same shape the scraper emits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of `name` in the header row (exact match, surrounding spaces ignored).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBoxscoreBundle {
    /// `<anything>_<YYYYMMDD>_<AWAY>@<HOME>`
    pub game_id: String,
    /// away batting, home batting, away pitching, home pitching
    pub tables: Vec<RawTable>,
    #[serde(default)]
    pub sb_info: Vec<String>,
    #[serde(default)]
    pub sb_headers: Vec<String>,
    /// Player page links found on the boxscore page.
    #[serde(default)]
    pub players: Vec<String>,
}

impl RawBoxscoreBundle {
    /// Check the slot layout before anything reads by index: four tables,
    /// batting slots carry `HITTERS`, pitching slots carry `PITCHERS`, and at
    /// most two stolen-base panels.
    pub fn validate(&self) -> Result<()> {
        if self.tables.len() != TABLE_SLOTS {
            return Err(ParseError::TableCount { expected: TABLE_SLOTS, found: self.tables.len() });
        }
        // Batting slots first, so errors name the lowest bad slot
        for side in Side::BOTH {
            let slot = BATTING_SLOT + side.index();
            if !self.tables[slot].has_column(HITTERS_COL) {
                return Err(ParseError::TableOrder { slot, expected: s!("batting") });
            }
        }
        for side in Side::BOTH {
            let slot = PITCHING_SLOT + side.index();
            if !self.tables[slot].has_column(PITCHERS_COL) {
                return Err(ParseError::TableOrder { slot, expected: s!("pitching") });
            }
        }
        if self.sb_info.len() > 2 {
            return Err(ParseError::UnexpectedStolenBaseShape(self.sb_info.len()));
        }
        Ok(())
    }

    pub fn batting(&self, side: Side) -> &RawTable {
        &self.tables[BATTING_SLOT + side.index()]
    }

    pub fn pitching(&self, side: Side) -> &RawTable {
        &self.tables[PITCHING_SLOT + side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cols: &[&str]) -> RawTable {
        RawTable::new(cols.iter().map(|c| s!(*c)).collect(), Vec::new())
    }

    fn bundle() -> RawBoxscoreBundle {
        RawBoxscoreBundle {
            game_id: s!("MLB_20230403_NYM@MIL"),
            tables: vec![
                table(&["HITTERS", "AB"]),
                table(&["HITTERS", "AB"]),
                table(&["PITCHERS", "IP"]),
                table(&["PITCHERS", "IP"]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn well_formed_bundle_validates() {
        assert_eq!(bundle().validate(), Ok(()));
    }

    #[test]
    fn wrong_table_count() {
        let mut b = bundle();
        b.tables.pop();
        assert_eq!(b.validate(), Err(ParseError::TableCount { expected: 4, found: 3 }));
    }

    #[test]
    fn swapped_slots_are_caught() {
        let mut b = bundle();
        b.tables.swap(1, 2);
        assert_eq!(
            b.validate(),
            Err(ParseError::TableOrder { slot: 1, expected: s!("batting") })
        );
    }

    #[test]
    fn pitching_table_in_home_batting_slot() {
        let mut b = bundle();
        b.tables[1] = table(&["PITCHERS", "IP"]);
        assert_eq!(
            b.validate(),
            Err(ParseError::TableOrder { slot: 1, expected: s!("batting") })
        );

        let mut b = bundle();
        b.tables[3] = table(&["HITTERS", "AB"]);
        assert_eq!(
            b.validate(),
            Err(ParseError::TableOrder { slot: 3, expected: s!("pitching") })
        );
    }

    #[test]
    fn too_many_panels() {
        let mut b = bundle();
        b.sb_info = vec![s!("a"), s!("b"), s!("c")];
        assert_eq!(b.validate(), Err(ParseError::UnexpectedStolenBaseShape(3)));
    }

    #[test]
    fn column_lookup_trims_headers() {
        let t = table(&[" HITTERS ", "AB"]);
        assert_eq!(t.column("HITTERS"), Some(0));
        assert_eq!(t.column("RBI"), None);
    }
}
