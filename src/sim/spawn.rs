//! Asteroid spawn policy and difficulty scaling
//!
//! Difficulty grows linearly with score and has no upper bound. It speeds up
//! falling asteroids directly and shortens the spawn interval down to a floor.

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Difficulty multiplier for a given score (`1 + score / divisor`)
#[inline]
pub fn difficulty(score: f64, divisor: f64) -> f32 {
    (1.0 + score / divisor) as f32
}

/// Seconds until the next spawn at the given difficulty
#[inline]
pub fn spawn_interval(difficulty: f32, tuning: &Tuning) -> f32 {
    (tuning.base_spawn_interval / difficulty).max(tuning.min_spawn_interval)
}

/// Roll a new asteroid just above the visible top edge.
///
/// Radius and x are chosen so the full horizontal extent stays inside the
/// spawn margins.
pub fn spawn_obstacle<R: Rng + ?Sized>(id: u32, tuning: &Tuning, rng: &mut R) -> Obstacle {
    let radius = tuning.obstacle_radius.lerp(rng.random::<f32>());
    let margin = tuning.spawn_margin;
    let usable = tuning.field_width - radius * 2.0 - margin * 2.0;
    let x = margin + radius + rng.random::<f32>() * usable;
    let y = -radius - tuning.spawn_offset;
    let speed = tuning.obstacle_speed.lerp(rng.random::<f32>());

    Obstacle {
        id,
        pos: Vec2::new(x, y),
        radius,
        speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_difficulty_starts_at_one() {
        assert_eq!(difficulty(0.0, 250.0), 1.0);
        assert_eq!(difficulty(250.0, 250.0), 2.0);
        assert_eq!(difficulty(1000.0, 250.0), 5.0);
    }

    #[test]
    fn test_spawn_interval_scales_then_floors() {
        let tuning = Tuning::default();
        assert!((spawn_interval(1.0, &tuning) - 0.45).abs() < 1e-6);
        assert!((spawn_interval(2.0, &tuning) - 0.225).abs() < 1e-6);
        assert_eq!(spawn_interval(10.0, &tuning), 0.14);
    }

    #[test]
    fn test_spawned_obstacle_within_margins() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..500 {
            let o = spawn_obstacle(id, &tuning, &mut rng);
            assert!(o.radius >= 14.0 && o.radius < 32.0);
            assert!(o.speed >= 90.0 && o.speed < 200.0);
            assert!(o.pos.x - o.radius >= tuning.spawn_margin - 1e-3);
            assert!(o.pos.x + o.radius <= tuning.field_width - tuning.spawn_margin + 1e-3);
            assert_eq!(o.pos.y, -o.radius - 10.0);
        }
    }

    #[test]
    fn test_spawn_is_reproducible_from_seed() {
        let tuning = Tuning::default();
        let a = spawn_obstacle(1, &tuning, &mut Pcg32::seed_from_u64(9));
        let b = spawn_obstacle(1, &tuning, &mut Pcg32::seed_from_u64(9));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_spawn_interval_never_below_floor(score in 0.0f64..1.0e12) {
            let tuning = Tuning::default();
            let interval = spawn_interval(difficulty(score, tuning.difficulty_divisor), &tuning);
            prop_assert!(interval >= 0.14);
        }
    }
}
