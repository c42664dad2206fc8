//! Arena bounds and static geometry
//!
//! The arena is a square of half-extent [`ARENA_HALF`] on the X/Z plane.
//! Clamping is the only boundary enforcement; walls and the gate are
//! described here for the renderer but never collide with anything.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::consts::*;

/// Clamp a point's X and Z into the arena; Y is left alone
#[inline]
pub fn respawn_inside(p: &mut Vec3) {
    p.x = clamp(p.x, -ARENA_HALF, ARENA_HALF);
    p.z = clamp(p.z, -ARENA_HALF, ARENA_HALF);
}

/// Move by `vel * dt`, flip velocity on any axis that left the arena, then clamp.
///
/// Returns which axes bounced as `(x, z)`.
pub fn move_and_bounce(pos: &mut Vec3, vel: &mut Vec2, dt: f32) -> (bool, bool) {
    pos.x += vel.x * dt;
    pos.z += vel.y * dt;

    let bounce_x = pos.x < -ARENA_HALF || pos.x > ARENA_HALF;
    let bounce_z = pos.z < -ARENA_HALF || pos.z > ARENA_HALF;
    if bounce_x {
        vel.x = -vel.x;
    }
    if bounce_z {
        vel.y = -vel.y;
    }
    respawn_inside(pos);
    (bounce_x, bounce_z)
}

/// What a box in the arena layout represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaPart {
    Wall,
    GatePillar,
    GateBeam,
    Tower,
}

/// Axis-aligned box, centered at `center` with full extents `size`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBox {
    pub part: ArenaPart,
    pub center: Vec3,
    pub size: Vec3,
}

impl ArenaBox {
    fn new(part: ArenaPart, center: Vec3, size: Vec3) -> Self {
        Self { part, center, size }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }
}

pub const GATE_PILLAR_WIDTH: f32 = 1.2;
pub const GATE_PILLAR_HEIGHT: f32 = WALL_HEIGHT + 1.8;
pub const TOWER_WIDTH: f32 = 1.6;
pub const TOWER_HEIGHT: f32 = 6.0;

/// Static arena description
pub struct Arena;

impl Arena {
    /// True if X/Z lie inside the playable square
    pub fn contains(p: Vec3) -> bool {
        p.x.abs() <= ARENA_HALF && p.z.abs() <= ARENA_HALF
    }

    /// Walls, gate and corner towers. The +Z wall has a gap of [`GATE_WIDTH`].
    pub fn layout() -> Vec<ArenaBox> {
        let h = ARENA_HALF;
        let t = WALL_THICKNESS;
        let len = 2.0 * h + t;
        let wall_y = GROUND_Y + WALL_HEIGHT * 0.5;
        let edge = h + t * 0.5;

        let gap = GATE_WIDTH;
        let seg = len * 0.5 - gap * 0.5;

        let mut boxes = vec![
            // South (-Z)
            ArenaBox::new(
                ArenaPart::Wall,
                Vec3::new(0.0, wall_y, -edge),
                Vec3::new(len, WALL_HEIGHT, t),
            ),
            // North (+Z), split around the gate
            ArenaBox::new(
                ArenaPart::Wall,
                Vec3::new(-seg * 0.5 - gap * 0.5, wall_y, edge),
                Vec3::new(seg, WALL_HEIGHT, t),
            ),
            ArenaBox::new(
                ArenaPart::Wall,
                Vec3::new(seg * 0.5 + gap * 0.5, wall_y, edge),
                Vec3::new(seg, WALL_HEIGHT, t),
            ),
            // West (-X)
            ArenaBox::new(
                ArenaPart::Wall,
                Vec3::new(-edge, wall_y, 0.0),
                Vec3::new(t, WALL_HEIGHT, len),
            ),
            // East (+X)
            ArenaBox::new(
                ArenaPart::Wall,
                Vec3::new(edge, wall_y, 0.0),
                Vec3::new(t, WALL_HEIGHT, len),
            ),
        ];

        let pole_z = edge - 0.01;
        let pole_y = GATE_PILLAR_HEIGHT * 0.5;
        for side in [-1.0, 1.0] {
            boxes.push(ArenaBox::new(
                ArenaPart::GatePillar,
                Vec3::new(side * (gap * 0.5 + GATE_PILLAR_WIDTH * 0.5), pole_y, pole_z),
                Vec3::new(GATE_PILLAR_WIDTH, GATE_PILLAR_HEIGHT, t * 1.25),
            ));
        }
        boxes.push(ArenaBox::new(
            ArenaPart::GateBeam,
            Vec3::new(0.0, GATE_PILLAR_HEIGHT + 0.4, pole_z),
            Vec3::new(gap + 1.0, 0.6, t * 1.3),
        ));

        let off = h - TOWER_WIDTH;
        for (sx, sz) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            boxes.push(ArenaBox::new(
                ArenaPart::Tower,
                Vec3::new(sx * off, TOWER_HEIGHT * 0.5, sz * off),
                Vec3::new(TOWER_WIDTH, TOWER_HEIGHT, TOWER_WIDTH),
            ));
        }

        boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respawn_inside_clamps_xz_only() {
        let mut p = Vec3::new(40.0, 7.0, -31.0);
        respawn_inside(&mut p);
        assert_eq!(p, Vec3::new(25.0, 7.0, -25.0));
    }

    #[test]
    fn bounce_flips_and_clamps() {
        let mut pos = Vec3::new(24.9, 0.6, 0.0);
        let mut vel = Vec2::new(5.0, 1.0);
        let bounced = move_and_bounce(&mut pos, &mut vel, 0.1);
        assert_eq!(bounced, (true, false));
        assert_eq!(vel, Vec2::new(-5.0, 1.0));
        assert_eq!(pos.x, ARENA_HALF);

        // Next step heads back inside without a second flip
        let bounced = move_and_bounce(&mut pos, &mut vel, 0.1);
        assert_eq!(bounced, (false, false));
        assert_eq!(vel.x, -5.0);
    }

    #[test]
    fn gate_leaves_gap_in_north_wall() {
        let walls: Vec<_> = Arena::layout()
            .into_iter()
            .filter(|b| b.part == ArenaPart::Wall && b.center.z > 0.0)
            .collect();
        assert_eq!(walls.len(), 2);
        let (left, right) = if walls[0].center.x < walls[1].center.x {
            (walls[0], walls[1])
        } else {
            (walls[1], walls[0])
        };
        let gap = right.min().x - left.max().x;
        assert!((gap - GATE_WIDTH).abs() < 1e-4);
    }

    #[test]
    fn walls_sit_outside_playable_area() {
        for wall in Arena::layout().iter().filter(|b| b.part == ArenaPart::Wall) {
            let outside_x = wall.min().x >= ARENA_HALF - 1e-4 || wall.max().x <= -ARENA_HALF + 1e-4;
            let outside_z = wall.min().z >= ARENA_HALF - 1e-4 || wall.max().z <= -ARENA_HALF + 1e-4;
            assert!(outside_x || outside_z, "wall intrudes: {wall:?}");
        }
    }
}
