// src/cli.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::consts::{DAY_FILE_FMT, DEFAULT_OUT_DIR, WORKERS};
use crate::config::options::{ExportOptions, OutputFormat, ParseOptions, RunOptions};

/// Turn scraped boxscore bundles into one day's batter and pitcher records.
#[derive(Parser, Debug)]
#[command(name = "boxscore", version, about)]
pub struct Cli {
    /// Bundle JSON files, each holding one game or an array of games
    #[arg(required = true)]
    pub bundles: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Day stamp for output files (YYYYMMDD); defaults to the games' date
    #[arg(short, long, value_parser = parse_day)]
    pub date: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Parser threads (1 = sequential)
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Exit with an error, writing nothing, if any game fails to parse
    #[arg(long)]
    pub strict: bool,

    /// Warn about display names shared by different players
    #[arg(long)]
    pub check_duplicates: bool,

    /// Also log to <DIR>/boxscore.log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn to_options(&self) -> RunOptions {
        RunOptions {
            inputs: self.bundles.clone(),
            parse: ParseOptions { workers: self.workers.max(1) },
            export: ExportOptions {
                format: self.format,
                out_dir: self.out_dir.clone(),
                date: self.date,
            },
            strict: self.strict,
            check_duplicates: self.check_duplicates,
        }
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DAY_FILE_FMT).map_err(|e| format!("expected YYYYMMDD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["boxscore", "day.json"]).unwrap();
        let opts = cli.to_options();
        assert_eq!(opts.inputs, vec![PathBuf::from("day.json")]);
        assert_eq!(opts.export.format, OutputFormat::Json);
        assert_eq!(opts.export.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(opts.export.date, None);
        assert_eq!(opts.parse.workers, WORKERS);
        assert!(!opts.strict);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "boxscore", "a.json", "b.json", "--format", "tsv", "--date", "20230403",
            "-w", "0", "--strict", "--check-duplicates",
        ])
        .unwrap();
        let opts = cli.to_options();
        assert_eq!(opts.inputs.len(), 2);
        assert_eq!(opts.export.format, OutputFormat::Tsv);
        assert_eq!(opts.export.date, NaiveDate::from_ymd_opt(2023, 4, 3));
        assert_eq!(opts.parse.workers, 1);
        assert!(opts.strict);
        assert!(opts.check_duplicates);
    }

    #[test]
    fn log_dir() {
        let cli = Cli::try_parse_from(["boxscore", "a.json"]).unwrap();
        assert_eq!(cli.log_dir, None);
        let cli = Cli::try_parse_from(["boxscore", "a.json", "--log-dir", "logs"]).unwrap();
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
        assert!(Cli::try_parse_from(["boxscore", "a.json", "--log-file", "x.log"]).is_err());
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(Cli::try_parse_from(["boxscore", "a.json", "--date", "04/03/2023"]).is_err());
    }

    #[test]
    fn bundles_are_required() {
        assert!(Cli::try_parse_from(["boxscore"]).is_err());
    }
}
