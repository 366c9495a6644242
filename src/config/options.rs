// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::*;

/// How a day's records are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `{ "batters": [...], "pitchers": [...] }` in one file.
    #[default]
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// Field delimiter for the tabular formats.
    pub fn delim(&self) -> Option<u8> {
        match self {
            OutputFormat::Json => None,
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
        }
    }
}

/// Aggregation settings: sequential unless more than one worker is asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub workers: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { workers: WORKERS }
    }
}

impl ParseOptions {
    pub fn sequential() -> Self {
        Self { workers: 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    pub out_dir: PathBuf,
    /// Day stamp for file names; `None` lets the runner pick one.
    pub date: Option<NaiveDate>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            date: None,
        }
    }
}

/// Everything one run of the binary needs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub inputs: Vec<PathBuf>,
    pub parse: ParseOptions,
    pub export: ExportOptions,
    /// Fail the run when any game could not be parsed.
    pub strict: bool,
    pub check_duplicates: bool,
}
