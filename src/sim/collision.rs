//! Collision detection between asteroids and the ship
//!
//! Asteroids are circles, the ship is an axis-aligned rectangle. The test
//! clamps the circle centre into the rectangle to find the closest point and
//! compares squared distances, so no square roots are taken.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from a centre point and full size
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Point on (or inside) the rectangle nearest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// Check whether a circle overlaps a rectangle.
///
/// Tangent contact (distance exactly equal to the radius) is not an overlap.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}
