// src/store.rs
//! Reading raw bundles handed over by the scraper, and writing day files.
use std::{fs, path::{Path, PathBuf}};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bundle::RawBoxscoreBundle;
use crate::config::consts::DAY_FILE_FMT;
use crate::error::StoreError;
use crate::file::ensure_directory;
use crate::parse::DayRecords;
use crate::records::{BatterRecord, PitcherRecord};

/// A bundle file holds either one game or a whole day's worth.
#[derive(Deserialize)]
#[serde(untagged)]
enum BundleFile {
    Many(Vec<RawBoxscoreBundle>),
    One(Box<RawBoxscoreBundle>),
}

pub fn load_bundles(path: &Path) -> Result<Vec<RawBoxscoreBundle>, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let parsed: BundleFile = serde_json::from_str(&text)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    let bundles = match parsed {
        BundleFile::Many(v) => v,
        BundleFile::One(b) => vec![*b],
    };
    logd!("Loaded {} bundle(s) from {}", bundles.len(), path.display());
    Ok(bundles)
}

/// Load several bundle files, keeping file order then in-file order.
pub fn load_all_bundles<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawBoxscoreBundle>, StoreError> {
    let mut out = Vec::new();
    for p in paths {
        out.extend(load_bundles(p.as_ref())?);
    }
    Ok(out)
}

/// On-disk shape of a day file.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFile {
    pub batters: Vec<BatterRecord>,
    pub pitchers: Vec<PitcherRecord>,
}

/// `<dir>/<YYYYMMDD>.json`
pub fn day_file_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(join!(&date.format(DAY_FILE_FMT).to_string(), ".json"))
}

/// Write `{ "batters": [...], "pitchers": [...] }` for the day, replacing any
/// earlier file for the same date.
pub fn save_day_json(dir: &Path, date: NaiveDate, day: &DayRecords) -> Result<PathBuf, StoreError> {
    ensure_directory(dir)?;
    let path = day_file_path(dir, date);
    let text = serde_json::to_string(day)
        .map_err(|source| StoreError::Json { path: path.clone(), source })?;
    fs::write(&path, text).map_err(|source| StoreError::Io { path: path.clone(), source })?;
    logf!(
        "Wrote {} batters, {} pitchers to {}",
        day.batters.len(),
        day.pitchers.len(),
        path.display()
    );
    Ok(path)
}

pub fn load_day_json(path: &Path) -> Result<DayFile, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}
