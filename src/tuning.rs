//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults reproduce the
//! arcade feel; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// Reading the tuning file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tuning file is not valid JSON for [`Tuning`]
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The values parse but describe an unplayable field
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Half-open `[min, max)` range of floats sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a unit sample `u ∈ [0, 1)` into the span
    #[inline]
    pub fn lerp(&self, u: f32) -> f32 {
        self.min + u * (self.max - self.min)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min < self.max
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Session ===
    pub starting_lives: u8,
    /// Points per second
    pub score_rate: f64,
    /// Score at which difficulty reaches 2.0
    pub difficulty_divisor: f64,

    // === Spawning ===
    pub base_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub obstacle_radius: Span,
    pub obstacle_speed: Span,
    pub spawn_margin: f32,
    pub spawn_offset: f32,
    pub prune_slack: f32,

    // === Ship ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_margin: f32,
    pub player_bottom_offset: f32,

    // === Starfield ===
    pub star_count: usize,
    pub star_drift_factor: f32,
    pub star_radius: Span,
    pub star_alpha: Span,
    pub star_speed: Span,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            starting_lives: STARTING_LIVES,
            score_rate: SCORE_RATE,
            difficulty_divisor: DIFFICULTY_DIVISOR,

            base_spawn_interval: BASE_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            obstacle_radius: Span::new(OBSTACLE_MIN_RADIUS, OBSTACLE_MAX_RADIUS),
            obstacle_speed: Span::new(OBSTACLE_MIN_SPEED, OBSTACLE_MAX_SPEED),
            spawn_margin: SPAWN_MARGIN,
            spawn_offset: SPAWN_OFFSET,
            prune_slack: PRUNE_SLACK,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_margin: PLAYER_MARGIN,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            star_count: STAR_COUNT,
            star_drift_factor: STAR_DRIFT_FACTOR,
            star_radius: Span::new(0.3, 1.8),
            star_alpha: Span::new(0.4, 1.0),
            star_speed: Span::new(10.0, 30.0),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Lowest legal ship x (centre)
    #[inline]
    pub fn player_min_x(&self) -> f32 {
        self.player_width / 2.0 + self.player_margin
    }

    /// Highest legal ship x (centre)
    #[inline]
    pub fn player_max_x(&self) -> f32 {
        self.field_width - self.player_width / 2.0 - self.player_margin
    }

    /// Reject values that would break the clamp and spawn math
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return invalid("field dimensions must be positive");
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives must be at least 1");
        }
        if !(self.score_rate >= 0.0) {
            return invalid("score_rate must be non-negative");
        }
        if !(self.difficulty_divisor > 0.0) {
            return invalid("difficulty_divisor must be positive");
        }
        if !(self.min_spawn_interval > 0.0 && self.base_spawn_interval >= self.min_spawn_interval)
        {
            return invalid("spawn intervals must satisfy 0 < min <= base");
        }
        if !self.obstacle_radius.is_valid() || !self.obstacle_speed.is_valid() {
            return invalid("obstacle radius and speed ranges must be non-empty");
        }
        if self.field_width - 2.0 * (self.spawn_margin + self.obstacle_radius.max) < 0.0 {
            return invalid("field is too narrow for the largest asteroid");
        }
        if !(self.player_width > 0.0 && self.player_height > 0.0 && self.player_speed >= 0.0) {
            return invalid("ship size must be positive and speed non-negative");
        }
        if self.player_min_x() > self.player_max_x() {
            return invalid("field is too narrow for the ship travel band");
        }
        if !self.star_radius.is_valid() || !self.star_alpha.is_valid() || !self.star_speed.is_valid()
        {
            return invalid("star ranges must be non-empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.player_min_x(), 40.0);
        assert_eq!(tuning.player_max_x(), 860.0);
    }

    #[test]
    fn test_partial_override() {
        let tuning = Tuning::from_json_str(r#"{ "starting_lives": 5, "score_rate": 20.0 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.score_rate, 20.0);
        assert_eq!(tuning.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_rejects_narrow_field() {
        let result = Tuning::from_json_str(r#"{ "field_width": 60.0 }"#);
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_range() {
        let result = Tuning::from_json_str(
            r#"{ "obstacle_speed": { "min": 100.0, "max": 100.0 } }"#,
        );
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_json() {
        let result = Tuning::from_json_str("{ not json");
        assert!(matches!(result, Err(TuningError::Json(_))));
    }

    #[test]
    fn test_span_lerp() {
        let span = Span::new(14.0, 32.0);
        assert_eq!(span.lerp(0.0), 14.0);
        assert_eq!(span.lerp(0.5), 23.0);
    }
}
