// src/config/consts.rs

// Raw table columns
pub const HITTERS_COL: &str = "HITTERS";
pub const PITCHERS_COL: &str = "PITCHERS";
pub const BATTING_STAT_COLS: [&str; 5] = ["AB", "R", "H", "RBI", "HR"];
pub const IP_COL: &str = "IP";
pub const HITS_COL: &str = "H";
pub const WALKS_COL: &str = "BB";
pub const EARNED_RUNS_COL: &str = "ER";
pub const STRIKEOUTS_COL: &str = "SO";

// Pitcher decision annotations, e.g. "J. Doe (W, 5-2)"
pub const WIN_MARKER: &str = "(W";
pub const SAVE_MARKER: &str = "(S";

// Game id: "<anything>_<YYYYMMDD>_<AWAY>@<HOME>"
pub const GAME_ID_SEP: char = '_';
pub const TEAMS_SEP: char = '@';
pub const GAME_ID_DATE_FMT: &str = "%Y%m%d";
pub const RECORD_DATE_FMT: &str = "%m/%d/%Y";

// Bundle table slots
pub const TABLE_SLOTS: usize = 4;
pub const BATTING_SLOT: usize = 0;
pub const PITCHING_SLOT: usize = 2;

// Local output
pub const DEFAULT_OUT_DIR: &str = "results";
pub const DAY_FILE_FMT: &str = "%Y%m%d";
pub const LOG_FILE_NAME: &str = "boxscore.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Concurrency
pub const WORKERS: usize = 4;
