// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::consts::DAY_FILE_FMT;
use crate::config::options::ExportOptions;
use crate::error::StoreError;
use crate::parse::DayRecords;
use crate::store;

/// Write a day in the format `export` asks for. Returns every path written:
/// one JSON file, or a batters file plus a pitchers file for CSV/TSV.
pub fn export_day(
    export: &ExportOptions,
    date: NaiveDate,
    day: &DayRecords,
) -> Result<Vec<PathBuf>, StoreError> {
    let Some(delim) = export.format.delim() else {
        return Ok(vec![store::save_day_json(&export.out_dir, date, day)?]);
    };

    ensure_directory(&export.out_dir)?;
    let stem = date.format(DAY_FILE_FMT).to_string();
    let ext = export.format.ext();

    let batters = export.out_dir.join(format!("{stem}_batters.{ext}"));
    write_records(&batters, &day.batters, delim)?;
    let pitchers = export.out_dir.join(format!("{stem}_pitchers.{ext}"));
    write_records(&pitchers, &day.pitchers, delim)?;

    logf!("Wrote {} and {}", batters.display(), pitchers.display());
    Ok(vec![batters, pitchers])
}

/// Header row from the record's field names, one line per record.
pub fn write_records<T: Serialize>(path: &Path, records: &[T], delim: u8) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut w = csv::WriterBuilder::new().delimiter(delim).from_path(path)?;
    for r in records {
        w.serialize(r)?;
    }
    w.flush().map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() && !dir.is_dir() {
        return Err(StoreError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
