//! LocalStorage store for the browser build

use super::{BestScoreStore, PersistenceError, parse_score};

/// Best score in `window.localStorage`, for the browser host shell
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl LocalStorageStore {
    /// Key used by earlier releases of the game
    pub const DEFAULT_KEY: &'static str = "flappyBirdHighScore";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistenceError::Unavailable("localStorage"))
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<f32>, PersistenceError> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => parse_score(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(_) => Err(PersistenceError::Unavailable("localStorage read")),
        }
    }

    fn save(&mut self, best: f32) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(&self.key, &best.to_string())
            .map_err(|_| PersistenceError::Unavailable("localStorage write"))
    }
}
