//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; there is no ambient
//! global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::starfield;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing has been played yet
    Idle,
    /// Active gameplay
    Running,
    /// Frames are not advanced
    Paused,
    /// Run ended (lives exhausted)
    Ended,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An asteroid entered the field
    ObstacleSpawned { id: u32, radius: f32, speed: f32 },
    /// The ship was hit
    LifeLost { remaining: u8 },
    /// Lives ran out; carries the continuous final score
    GameOver { score: f64 },
}

/// The player's ship (axis-aligned rectangle, centre-anchored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed in units/second
    pub speed: f32,
}

impl Player {
    /// Spawn the ship centred horizontally near the bottom edge
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.field_width / 2.0,
                tuning.field_height - tuning.player_bottom_offset,
            ),
            width: tuning.player_width,
            height: tuning.player_height,
            speed: tuning.player_speed,
        }
    }

    /// Collision rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(self.width, self.height))
    }

    /// Move horizontally by `direction` (-1, 0 or 1) and clamp into the band.
    /// An inverted band (field narrower than the ship) pins the ship to `min_x`.
    pub fn steer(&mut self, direction: f32, dt: f32, min_x: f32, max_x: f32) {
        self.pos.x += direction * self.speed * dt;
        self.pos.x = self.pos.x.min(max_x).max(min_x);
    }
}

/// A falling asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Base fall speed in units/second (scaled by difficulty)
    pub speed: f32,
}

impl Obstacle {
    /// Top edge of the asteroid
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }
}

/// A background particle (cosmetic only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub speed: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance parameters this run was created with
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Spawn and starfield randomness
    pub rng: Pcg32,
    /// Continuous score; displayed floored
    pub score: f64,
    /// Remaining lives
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    /// Player ship
    pub player: Player,
    /// Active asteroids in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Background particles (constant count)
    pub stars: Vec<Star>,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    /// Next asteroid ID
    next_id: u32,
}

impl GameState {
    /// Create an idle game with a fresh starfield
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create an idle game drawing randomness from `rng`
    pub fn with_rng(tuning: Tuning, seed: u64, mut rng: Pcg32) -> Self {
        let stars = starfield::create_stars(&tuning, &mut rng);
        Self {
            seed,
            rng,
            score: 0.0,
            lives: tuning.starting_lives,
            phase: GamePhase::Idle,
            spawn_timer: 0.0,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            stars,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Reset the session for a new run and start it.
    ///
    /// The starfield is kept; it is never destroyed during a session.
    pub fn reset(&mut self) {
        self.score = 0.0;
        self.lives = self.tuning.starting_lives;
        self.spawn_timer = 0.0;
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.events.clear();
        self.next_id = 1;
        self.phase = GamePhase::Running;
    }

    /// Flip between Running and Paused. Returns the new phase.
    ///
    /// Idle and Ended are left untouched.
    pub fn toggle_pause(&mut self) -> GamePhase {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
        self.phase
    }

    /// Score as shown to the player
    #[inline]
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Current difficulty multiplier
    #[inline]
    pub fn difficulty(&self) -> f32 {
        super::spawn::difficulty(self.score, self.tuning.difficulty_divisor)
    }

    /// Whether the run is advancing
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new asteroid ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all buffered events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.lives, 3);
        assert_eq!(state.stars.len(), 80);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(450.0, 540.0));
    }

    #[test]
    fn test_reset_clears_run() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.reset();
        state.score = 123.4;
        state.lives = 1;
        state.player.pos.x = 100.0;
        let id = state.next_obstacle_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(100.0, 100.0),
            radius: 20.0,
            speed: 100.0,
        });
        state.phase = GamePhase::Ended;

        state.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.spawn_timer, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos.x, 450.0);
        assert_eq!(state.stars.len(), 80);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.toggle_pause(), GamePhase::Idle);

        state.reset();
        assert_eq!(state.toggle_pause(), GamePhase::Paused);
        assert_eq!(state.toggle_pause(), GamePhase::Running);

        state.phase = GamePhase::Ended;
        assert_eq!(state.toggle_pause(), GamePhase::Ended);
    }

    #[test]
    fn test_display_score_floors() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.score = 11.999;
        assert_eq!(state.display_score(), 11);
    }

    #[test]
    fn test_player_rect() {
        let player = Player::new(&Tuning::default());
        let rect = player.rect();
        assert_eq!(rect.min, Vec2::new(430.0, 525.0));
        assert_eq!(rect.max, Vec2::new(470.0, 555.0));
    }
}
