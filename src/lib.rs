//! Cosmic Dodger - A neon asteroid-dodging arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (spawning, movement, difficulty, collisions)
//! - `driver`: Frame driver state machine and session finalization
//! - `render`: Presentation seam (renderers consume read-only frame views)
//! - `platform`: Browser/native platform abstraction (clock, key mapping)
//! - `persistence`: Key/value storage for best score and theme
//! - `tuning`: Data-driven game balance

pub mod best_score;
pub mod driver;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use best_score::BestScore;
pub use driver::{Command, FrameDriver, FrameOutcome};
pub use settings::Theme;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 3;

    /// Points per second of survival
    pub const SCORE_RATE: f64 = 12.0;
    /// Score needed to add 1.0 to the difficulty factor
    pub const DIFFICULTY_DIVISOR: f64 = 250.0;

    /// Spawn interval at difficulty 1.0 (seconds)
    pub const BASE_SPAWN_INTERVAL: f32 = 0.45;
    /// Spawn interval floor (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.14;

    /// Asteroid defaults
    pub const OBSTACLE_MIN_RADIUS: f32 = 14.0;
    pub const OBSTACLE_MAX_RADIUS: f32 = 32.0;
    pub const OBSTACLE_MIN_SPEED: f32 = 90.0;
    pub const OBSTACLE_MAX_SPEED: f32 = 200.0;
    /// Horizontal keep-out at the field edges for spawned asteroids
    pub const SPAWN_MARGIN: f32 = 24.0;
    /// Extra distance above the top edge an asteroid spawns at
    pub const SPAWN_OFFSET: f32 = 10.0;
    /// Distance past the bottom edge before an asteroid is pruned
    pub const PRUNE_SLACK: f32 = 60.0;

    /// Ship defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 320.0;
    pub const PLAYER_MARGIN: f32 = 20.0;
    /// Ship centre distance from the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;

    /// Background starfield
    pub const STAR_COUNT: usize = 80;
    /// Stars drift at a fraction of their speed for a parallax feel
    pub const STAR_DRIFT_FACTOR: f32 = 0.3;
    /// Recycled stars re-enter slightly above the top edge
    pub const STAR_RESPAWN_Y: f32 = -2.0;
}
