//! Axis-aligned collision testing
//!
//! The player is a box; each obstacle contributes a solid box above and below
//! its gap. Overlap uses strict inequalities on all four half-plane tests, so
//! boxes that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::ObstacleField;
use crate::consts::*;

/// Axis-aligned box, min/max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test: shared edges do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The player's collision box at the given vertical position
pub fn player_box(player_y: f32) -> Aabb {
    Aabb::centered(
        Vec2::new(PLAYER_X, player_y),
        Vec2::new(PLAYER_W, PLAYER_H),
    )
}

/// Test the player box against every nearby obstacle's pipe pair.
/// Any single overlap ends the run.
pub fn player_hits_field(player_y: f32, field: &ObstacleField) -> bool {
    let player = player_box(player_y);
    field
        .obstacles_near(PLAYER_X, (PIPE_WIDTH + PLAYER_W) / 2.0)
        .any(|ob| player.intersects(&ob.top_box()) || player.intersects(&ob.bottom_box()))
}
