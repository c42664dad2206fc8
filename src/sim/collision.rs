//! Overlap tests and predator/prey classification
//!
//! Everything works on squared distances; the only sqrt is the push-apart
//! normalization.

use glam::Vec3;

use crate::consts::*;
use crate::distance_squared;

/// Outcome of the player touching an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player is clearly bigger
    Eat,
    /// Player is clearly smaller
    Die,
    /// Roughly the same size
    Push,
}

/// Sphere overlap (touching counts)
#[inline]
pub fn overlaps(a: Vec3, ra: f32, b: Vec3, rb: f32) -> bool {
    let reach = ra + rb;
    distance_squared(a, b) <= reach * reach
}

/// Decide what a contact does. Thresholds are asymmetric on purpose.
pub fn classify(player_radius: f32, enemy_radius: f32) -> Contact {
    if player_radius > enemy_radius * EAT_RATIO {
        Contact::Eat
    } else if player_radius < enemy_radius * DEATH_RATIO {
        Contact::Die
    } else {
        Contact::Push
    }
}

/// Points awarded for eating an enemy of `radius`
#[inline]
pub fn enemy_points(radius: f32) -> u32 {
    (2.0 + 2.0 * radius).round() as u32
}

/// Mass gained from eating an enemy of `radius`
#[inline]
pub fn enemy_mass(radius: f32) -> f32 {
    0.25 + 0.35 * radius
}

/// Displace `pos` by [`PUSH_DISTANCE`] away from `from` on the horizontal plane
pub fn push_apart(pos: &mut Vec3, from: Vec3) {
    let dx = pos.x - from.x;
    let dz = pos.z - from.z;
    let len = (dx * dx + dz * dz).sqrt() + PUSH_EPSILON;
    pos.x += dx / len * PUSH_DISTANCE;
    pos.z += dz / len * PUSH_DISTANCE;
}
