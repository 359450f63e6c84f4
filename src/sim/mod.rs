//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep driven by frame timestamps
//! - Injectable RNG (seeded `Pcg32` or any `rand::Rng`)
//! - Stable iteration order (asteroids in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use spawn::{difficulty, spawn_interval, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, Star};
pub use tick::{TickInput, tick};
