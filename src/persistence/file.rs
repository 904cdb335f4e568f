//! JSON file store for native builds
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write leaves the previous record intact.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{BestScoreStore, PersistenceError, check_score};

/// On-disk record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestScoreRecord {
    version: u32,
    best: f32,
}

const RECORD_VERSION: u32 = 1;

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<f32>, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: BestScoreRecord = serde_json::from_str(&json)?;
        if record.version != RECORD_VERSION {
            log::warn!(
                "Best score record version {} (expected {})",
                record.version,
                RECORD_VERSION
            );
        }
        check_score(record.best).map(Some)
    }

    fn save(&mut self, best: f32) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let record = BestScoreRecord {
            version: RECORD_VERSION,
            best,
        };
        let json = serde_json::to_string_pretty(&record)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
