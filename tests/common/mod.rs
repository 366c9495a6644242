// tests/common/mod.rs
//
// Synthetic boxscore bundles shaped like the scraper's output.
//
#![allow(dead_code)]
use boxscore::{RawBoxscoreBundle, RawTable};

pub fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn batting(rows: &[&str]) -> RawTable {
    // name+position, AB R H RBI BB SO HR
    RawTable::new(
        strings(&["HITTERS", "AB", "R", "H", "RBI", "BB", "SO", "HR", "AVG"]),
        rows.iter()
            .map(|&hitter| strings(&[hitter, "4", "1", "2", "1", "0", "1", "0", ".250"]))
            .collect(),
    )
}

pub fn pitching(rows: &[(&str, &str)]) -> RawTable {
    // (name+annotation, IP)
    RawTable::new(
        strings(&["PITCHERS", "IP", "H", "R", "ER", "BB", "SO", "HR", "ERA"]),
        rows.iter()
            .map(|&(p, ip)| strings(&[p, ip, "5", "2", "2", "1", "6", "1", "3.50"]))
            .collect(),
    )
}

pub fn bundle(
    game_id: &str,
    away_bat: &[&str],
    home_bat: &[&str],
    away_pit: &[(&str, &str)],
    home_pit: &[(&str, &str)],
) -> RawBoxscoreBundle {
    RawBoxscoreBundle {
        game_id: game_id.to_string(),
        tables: vec![
            batting(away_bat),
            batting(home_bat),
            pitching(away_pit),
            pitching(home_pit),
        ],
        sb_info: Vec::new(),
        sb_headers: Vec::new(),
        players: Vec::new(),
    }
}

/// NYM @ MIL: 2 + 1 batters, 1 + 2 pitchers.
pub fn game_one() -> RawBoxscoreBundle {
    bundle(
        "MLB_20230403_NYM@MIL",
        &["B. Nimmo CF", "S. Marte RF"],
        &["C. Yelich LF"],
        &[("M. Scherzer (L, 0-1)", "5.2")],
        &[("C. Burnes (W, 1-0)", "6.1"), ("D. Williams (S, 1)", "1.0")],
    )
}

/// SEA @ TEX: 1 + 1 batters, 1 + 1 pitchers.
pub fn game_two() -> RawBoxscoreBundle {
    bundle(
        "MLB_20230403_SEA@TEX",
        &["J. Rodriguez CF"],
        &["a- M. Semien PH"],
        &[("L. Castillo", "7.0")],
        &[("N. Eovaldi (W, 1-0)", "9.0")],
    )
}
