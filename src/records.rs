// src/records.rs
use serde::{Deserialize, Serialize};

/// One batter's line for one game. Field names match the day files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BatterRecord {
    pub name: String,
    pub team: String,
    pub date: String,
    #[serde(rename = "POS")]
    pub position: String,
    pub ab: u32,
    pub r: u32,
    pub h: u32,
    pub rbi: u32,
    pub hr: u32,
    pub sb: u32,
}

/// One pitcher's line for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PitcherRecord {
    pub name: String,
    pub team: String,
    pub date: String,
    pub wins: u32,
    pub saves: u32,
    pub outs: u32,
    pub er: u32,
    /// walks + hits
    pub wh: u32,
    pub so: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedGame {
    /// MM/DD/YYYY
    pub date: String,
    /// (away, home)
    pub teams: (String, String),
    pub batters: Vec<BatterRecord>,
    pub pitchers: Vec<PitcherRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batter_serializes_with_day_file_keys() {
        let b = BatterRecord {
            name: s!("M. Trout"),
            team: s!("LAA"),
            date: s!("04/03/2023"),
            position: s!("CF"),
            ab: 4, r: 1, h: 2, rbi: 3, hr: 1, sb: 0,
        };
        let v = serde_json::to_value(&b).unwrap();
        for key in ["NAME", "TEAM", "DATE", "POS", "AB", "R", "H", "RBI", "HR", "SB"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        assert_eq!(v["POS"], "CF");
    }

    #[test]
    fn pitcher_serializes_with_day_file_keys() {
        let p = PitcherRecord {
            name: s!("J. Doe"),
            team: s!("MIL"),
            date: s!("04/03/2023"),
            wins: 1, saves: 0, outs: 19, er: 2, wh: 7, so: 8,
        };
        let v = serde_json::to_value(&p).unwrap();
        for key in ["NAME", "TEAM", "DATE", "WINS", "SAVES", "OUTS", "ER", "WH", "SO"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        assert_eq!(v["OUTS"], 19);
    }
}
