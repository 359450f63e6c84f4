//! Best score record
//!
//! A single integer that survives across sessions. It only ever goes up.

use serde::{Deserialize, Serialize};

/// Best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Check if a final (continuous) score beats the record
    pub fn qualifies(&self, score: f64) -> bool {
        score > self.value as f64
    }

    /// Submit a finished session's score.
    ///
    /// Returns the new record when it was beaten, `None` otherwise. The stored
    /// value is the floored score.
    pub fn submit(&mut self, score: f64) -> Option<u64> {
        if !self.qualifies(score) {
            return None;
        }
        self.value = self.value.max(score.floor() as u64);
        Some(self.value)
    }
}
