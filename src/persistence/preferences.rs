//! Best score and theme on top of a [`Storage`] backend

use super::{Storage, StorageError};
use crate::settings::Theme;

/// Storage key for the best score
pub const BEST_KEY: &str = "cosmic-dodger-neon-best";
/// Storage key for the theme
pub const THEME_KEY: &str = "cosmic-dodger-neon-theme";

/// Parse a stored best score.
///
/// Integers parse directly and decimals floor; anything else (negative,
/// non-finite, garbage) is `None`.
pub fn parse_score(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u64>() {
        return Some(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.floor() as u64),
        _ => None,
    }
}

/// Persisted preferences
#[derive(Debug)]
pub struct Preferences<S: Storage> {
    storage: S,
}

impl<S: Storage> Preferences<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored best score; missing or malformed data counts as 0
    pub fn load_best_score(&self) -> u64 {
        match self.storage.get_item(BEST_KEY) {
            Ok(Some(raw)) => parse_score(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring malformed best score {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("Failed to read best score: {}", e);
                0
            }
        }
    }

    /// Store `candidate` if it beats the stored value. Returns whether it was written.
    pub fn save_best_score(&mut self, candidate: u64) -> Result<bool, StorageError> {
        if candidate <= self.load_best_score() {
            return Ok(false);
        }
        self.storage.set_item(BEST_KEY, &candidate.to_string())?;
        log::info!("Best score saved ({})", candidate);
        Ok(true)
    }

    /// Stored theme; defaults to dark
    pub fn load_theme(&self) -> Theme {
        match self.storage.get_item(THEME_KEY) {
            Ok(Some(raw)) => Theme::from_str(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Failed to read theme: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set_item(THEME_KEY, theme.as_str())
    }
}
