//! Best score persistence
//!
//! Stores only the single best score. Callers treat every failure as "no
//! stored score" / "not saved" and keep playing.

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

/// Why a load or save failed
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored record is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored best score is not a finite non-negative number: {0}")]
    Corrupt(String),
    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
}

/// Where the best score lives between runs
pub trait BestScoreStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<f32>, PersistenceError>;

    fn save(&mut self, best: f32) -> Result<(), PersistenceError>;
}

/// Accept only finite, non-negative scores
pub fn check_score(score: f32) -> Result<f32, PersistenceError> {
    if score.is_finite() && score >= 0.0 {
        Ok(score)
    } else {
        Err(PersistenceError::Corrupt(score.to_string()))
    }
}

/// Parse a stored score, rejecting NaN, infinities and negatives
pub fn parse_score(raw: &str) -> Result<f32, PersistenceError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| PersistenceError::Corrupt(raw.to_string()))
        .and_then(check_score)
}

/// Load the best score, degrading any failure to 0
pub fn load_best_or_zero(store: &dyn BestScoreStore) -> f32 {
    match store.load() {
        Ok(Some(best)) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Ok(None) => 0.0,
        Err(e) => {
            log::warn!("Best score unavailable, starting from 0: {}", e);
            0.0
        }
    }
}

/// Save the best score, logging instead of failing
pub fn save_best_logged(store: &mut dyn BestScoreStore, best: f32) {
    match store.save(best) {
        Ok(()) => log::info!("Best score saved ({})", best),
        Err(e) => log::warn!("Could not save best score {}: {}", best, e),
    }
}

/// No persistence at all
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl BestScoreStore for NullStore {
    fn load(&self) -> Result<Option<f32>, PersistenceError> {
        Ok(None)
    }

    fn save(&mut self, _best: f32) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// In-process store; survives resets but not restarts
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub best: Option<f32>,
    /// Number of successful saves
    pub saves: u32,
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<f32>, PersistenceError> {
        Ok(self.best)
    }

    fn save(&mut self, best: f32) -> Result<(), PersistenceError> {
        self.best = Some(best);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl BestScoreStore for BrokenStore {
        fn load(&self) -> Result<Option<f32>, PersistenceError> {
            Err(PersistenceError::Unavailable("test"))
        }

        fn save(&mut self, _best: f32) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("test"))
        }
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("12.5").unwrap(), 12.5);
        assert_eq!(parse_score(" 3 ").unwrap(), 3.0);
        assert!(parse_score("NaN").is_err());
        assert!(parse_score("-1").is_err());
        assert!(parse_score("lots").is_err());
    }

    #[test]
    fn test_check_score() {
        assert_eq!(check_score(0.0).unwrap(), 0.0);
        assert_eq!(check_score(17.5).unwrap(), 17.5);
        assert!(matches!(
            check_score(-0.5),
            Err(PersistenceError::Corrupt(_))
        ));
        assert!(check_score(f32::INFINITY).is_err());
        assert!(check_score(f32::NAN).is_err());
    }

    #[test]
    fn test_broken_store_degrades() {
        let mut store = BrokenStore;
        assert_eq!(load_best_or_zero(&store), 0.0);
        // Must not panic
        save_best_logged(&mut store, 4.0);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(load_best_or_zero(&store), 0.0);
        save_best_logged(&mut store, 7.5);
        assert_eq!(load_best_or_zero(&store), 7.5);
        assert_eq!(store.saves, 1);
    }
}
