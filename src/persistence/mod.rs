//! Save/load of player preferences
//!
//! Features:
//! - LocalStorage-shaped string key/value backends
//! - JSON file backend with tmp-then-rename writes (native)
//! - Malformed data reads as "no record" instead of an error

pub mod preferences;
pub mod storage;

pub use preferences::{BEST_KEY, Preferences, THEME_KEY, parse_score};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, Storage};

/// Storage backend failures
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform store is missing or refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
