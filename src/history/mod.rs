//! Assessment history persistence.
//!
//! One JSON file holding the full ordered record list under a fixed,
//! versioned key. Every write rewrites the whole list; reads treat a
//! missing or malformed file as an empty history rather than an
//! error, so a broken store degrades to "no history" instead of
//! taking the page down.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use log::{info, warn};

use crate::models::ResultRecord;

/// Storage key; the version marker lives in the name itself.
const HISTORY_KEY: &str = "mci_history_v1";

/// First-run seed: five synthetic results so the trend chart is not
/// empty before the first real assessment. Offsets are days before
/// seeding time; levels follow from the percentages.
const SEED_RECORDS: [(i64, u8); 5] = [(28, 18), (21, 24), (14, 31), (7, 37), (3, 44)];

/// File-backed history log. Load-append-rewrite on every save, with
/// no mutual exclusion: fine for the single-user flow it serves, not
/// safe for concurrent writers.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Open (and create, if needed) the store under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).with_context(|| {
            format!("failed to create data directory {}", data_dir.display())
        })?;
        Ok(Self {
            path: data_dir.join(format!("{HISTORY_KEY}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored records, oldest first. Missing or malformed content
    /// is an empty history, never an error.
    pub fn load(&self) -> Vec<ResultRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "Malformed history at {}; treating as empty: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Append one record, rewriting the full list.
    pub fn save(&self, record: &ResultRecord) -> Result<()> {
        let mut records = self.load();
        records.push(record.clone());
        self.persist(&records)
    }

    /// Drop the whole history.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("failed to remove history at {}", self.path.display())
            }),
        }
    }

    /// One-time initialization: when the store is empty, insert the
    /// fixed seed records with timestamps relative to now. Returns
    /// whether seeding happened.
    pub fn seed_if_empty(&self) -> Result<bool> {
        if !self.load().is_empty() {
            return Ok(false);
        }

        let now = Utc::now();
        let records: Vec<ResultRecord> = SEED_RECORDS
            .iter()
            .map(|(days_ago, percentage)| {
                ResultRecord::new(now - Duration::days(*days_ago), *percentage)
            })
            .collect();
        self.persist(&records)?;
        info!("Seeded history with {} synthetic records", records.len());
        Ok(true)
    }

    /// Write the full history, content identical to the persisted
    /// form, to a date-stamped file under `dir`. Returns the path of
    /// the exported file.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create export directory {}", dir.display()))?;
        let file_name = format!("mci-history-{}.json", Utc::now().format("%Y-%m-%d"));
        let export_path = dir.join(file_name);
        let records = self.load();
        let serialized = serde_json::to_string_pretty(&records)?;
        fs::write(&export_path, serialized)
            .with_context(|| format!("failed to export history to {}", export_path.display()))?;
        Ok(export_path)
    }

    fn persist(&self, records: &[ResultRecord]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write history to {}", self.path.display()))
    }
}
