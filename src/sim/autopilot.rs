//! Idle/demo mode: an AI that flies the ship
//!
//! Looks for the asteroid that will reach the ship's row soonest while lined
//! up with it, and steers away from it. Asteroids already level with the ship
//! still count as threats until they have fallen past it.

use super::state::GameState;
use super::tick::TickInput;

/// Extra horizontal clearance the autopilot keeps around the ship
const SAFETY_GAP: f32 = 12.0;
/// Ignore threats further away than this many seconds
const LOOKAHEAD_SECS: f32 = 1.5;
/// No correction while this close to the idle target
const DEAD_ZONE: f32 = 8.0;

/// Pick held keys for the next tick
pub fn steer(state: &GameState) -> TickInput {
    let player = &state.player;
    let ship_top = player.pos.y - player.height / 2.0;
    let ship_bottom = player.pos.y + player.height / 2.0;
    let difficulty = state.difficulty();

    // Soonest asteroid whose column overlaps the ship (with clearance)
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.top() < ship_bottom)
        .filter(|o| (o.pos.x - player.pos.x).abs() < o.radius + player.width / 2.0 + SAFETY_GAP)
        .map(|o| {
            let fall = o.speed * difficulty;
            let eta = ((ship_top - (o.pos.y + o.radius)) / fall.max(f32::EPSILON)).max(0.0);
            (o, eta)
        })
        .filter(|(_, eta)| *eta <= LOOKAHEAD_SECS)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let (min_x, max_x) = (state.tuning.player_min_x(), state.tuning.player_max_x());

    if let Some((obstacle, _)) = threat {
        // Dodge away from the asteroid's centre unless pinned against a wall
        let go_right = if obstacle.pos.x > player.pos.x {
            player.pos.x - min_x < 1.0
        } else {
            max_x - player.pos.x >= 1.0
        };
        return TickInput {
            left: !go_right,
            right: go_right,
        };
    }

    // Drift back to the middle
    let center = state.tuning.field_width / 2.0;
    let offset = center - player.pos.x;
    TickInput {
        left: offset < -DEAD_ZONE,
        right: offset > DEAD_ZONE,
    }
}
