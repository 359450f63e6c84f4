//! Scrolling background starfield
//!
//! Purely cosmetic: stars drift down and wrap back to the top. The batch size
//! never changes during a session.

use glam::Vec2;
use rand::Rng;

use super::state::Star;
use crate::consts::STAR_RESPAWN_Y;
use crate::tuning::Tuning;

/// Scatter the initial batch of stars over the whole field
pub fn create_stars<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Vec<Star> {
    (0..tuning.star_count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random::<f32>() * tuning.field_width,
                rng.random::<f32>() * tuning.field_height,
            ),
            radius: tuning.star_radius.lerp(rng.random::<f32>()),
            alpha: tuning.star_alpha.lerp(rng.random::<f32>()),
            speed: tuning.star_speed.lerp(rng.random::<f32>()),
        })
        .collect()
}

/// Drift stars downward, recycling any that leave the bottom edge
pub fn advance_stars<R: Rng + ?Sized>(stars: &mut [Star], dt: f32, tuning: &Tuning, rng: &mut R) {
    for star in stars.iter_mut() {
        star.pos.y += star.speed * dt * tuning.star_drift_factor;
        if star.pos.y > tuning.field_height {
            star.pos.y = STAR_RESPAWN_Y;
            star.pos.x = rng.random::<f32>() * tuning.field_width;
        }
    }
}
