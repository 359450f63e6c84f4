//! Variable timestep simulation tick
//!
//! Advances the game by `dt` seconds. Step order matters: difficulty reads the
//! freshly accrued score, and collisions only see asteroids that survived
//! pruning.

use super::collision::circle_rect_overlap;
use super::spawn::{spawn_interval, spawn_obstacle};
use super::starfield::advance_stars;
use super::state::{GameEvent, GamePhase, GameState};

/// Held input for a single tick (level-triggered, never consumed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Horizontal direction: -1, 0 or 1. Holding both cancels out.
    #[inline]
    pub fn direction(&self) -> f32 {
        f32::from(u8::from(self.right)) - f32::from(u8::from(self.left))
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Don't tick unless a run is active
    if state.phase != GamePhase::Running {
        return;
    }
    let dt = dt.max(0.0);

    // Survival score
    state.score += f64::from(dt) * state.tuning.score_rate;

    advance_stars(&mut state.stars, dt, &state.tuning, &mut state.rng);

    // Ship movement
    let (min_x, max_x) = (state.tuning.player_min_x(), state.tuning.player_max_x());
    state.player.steer(input.direction(), dt, min_x, max_x);

    let difficulty = state.difficulty();

    // Spawn at most one asteroid per tick
    state.spawn_timer -= dt;
    if state.spawn_timer <= 0.0 {
        let id = state.next_obstacle_id();
        let obstacle = spawn_obstacle(id, &state.tuning, &mut state.rng);
        log::debug!(
            "Spawned asteroid {} (r={:.1}, speed={:.1}, difficulty={:.2})",
            id,
            obstacle.radius,
            obstacle.speed,
            difficulty
        );
        state.events.push(GameEvent::ObstacleSpawned {
            id,
            radius: obstacle.radius,
            speed: obstacle.speed,
        });
        state.obstacles.push(obstacle);
        state.spawn_timer = spawn_interval(difficulty, &state.tuning);
    }

    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed * dt * difficulty;
    }

    // Prune asteroids well past the bottom edge
    let cutoff = state.tuning.field_height + state.tuning.prune_slack;
    state.obstacles.retain(|o| o.top() <= cutoff);

    // Collisions against the ship
    let ship = state.player.rect();
    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &state.obstacles[i];
        if !circle_rect_overlap(obstacle.pos, obstacle.radius, &ship) {
            i += 1;
            continue;
        }

        // A hit asteroid is gone for good so it can't hit twice
        state.obstacles.remove(i);
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });

        if state.lives == 0 {
            state.phase = GamePhase::Ended;
            state.events.push(GameEvent::GameOver { score: state.score });
            return;
        }
    }
}
