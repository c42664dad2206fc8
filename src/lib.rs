//! Arena Grow - a 3D arena game where you grow by eating smaller things
//!
//! Core modules:
//! - `sim`: Simulation core (entities, collisions, session state machine)
//! - `driver`: Frame driver (elapsed time, clamping, one-shot input)
//! - `autopilot`: Demo steering used by the headless host
//! - `settings`: User configuration

pub mod autopilot;
pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, FrameOutcome};
pub use settings::{QualityPreset, Settings, SettingsError};

use glam::Vec3;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Upper bound on a single tick's elapsed time (seconds)
    pub const MAX_DT: f32 = 0.1;
    /// Default frame cadence of the host driver
    pub const FRAME_RATE_HZ: u32 = 60;

    /// Arena half-extent on X and Z
    pub const ARENA_HALF: f32 = 25.0;
    pub const GROUND_Y: f32 = 0.0;
    pub const WALL_THICKNESS: f32 = 0.6;
    pub const WALL_HEIGHT: f32 = 3.0;
    /// Gate gap in the +Z wall (visual only, no collision)
    pub const GATE_WIDTH: f32 = 8.0;

    /// Player defaults
    pub const PLAYER_START_Y: f32 = 0.6;
    pub const PLAYER_BASE_RADIUS: f32 = 0.6;
    pub const PLAYER_MAX_SPEED: f32 = 9.0;
    pub const PLAYER_START_MASS: f32 = 1.0;
    /// Max speed divisor grows by this per unit of mass
    pub const MASS_SPEED_PENALTY: f32 = 0.08;
    /// Velocity blend toward target while steering
    pub const ACCELERATION: f32 = 0.1;
    /// Velocity multiplier per tick with no input
    pub const DECELERATION: f32 = 0.95;
    /// Velocity components below this snap to zero
    pub const VELOCITY_SNAP: f32 = 0.1;
    /// Pointer deadzone around the screen center (pixels)
    pub const POINTER_DEADZONE: f32 = 8.0;

    /// Dash
    pub const DASH_SPEED_MULTIPLIER: f32 = 12.0;
    pub const DASH_COOLDOWN: f32 = 0.6;
    pub const DASH_PARTICLES: usize = 20;

    /// World population
    pub const PELLET_COUNT: usize = 16;
    pub const ENEMY_COUNT: usize = 12;
    pub const PELLET_RADIUS: f32 = 0.45;
    pub const PELLET_Y: f32 = 0.5;
    pub const ENEMY_Y: f32 = 0.6;
    pub const ENEMY_MIN_RADIUS: f32 = 0.35;
    pub const ENEMY_MAX_RADIUS: f32 = 2.2;
    pub const ENEMY_MIN_SPEED: f32 = 1.2;

    /// Cosmetic spin (degrees per second)
    pub const ENEMY_SPIN: f32 = 30.0;
    pub const PELLET_SPIN: f32 = 60.0;

    /// Eating
    pub const PELLET_SCORE: u32 = 1;
    pub const PELLET_MASS: f32 = 0.15;
    pub const PELLET_PARTICLES: usize = 5;
    pub const ENEMY_PARTICLES: usize = 15;
    /// Player must exceed enemy radius by this factor to eat it
    pub const EAT_RATIO: f32 = 1.04;
    /// Player below enemy radius by this factor dies on contact.
    /// Deliberately not symmetric with EAT_RATIO; keep both as tuned.
    pub const DEATH_RATIO: f32 = 0.96;
    pub const PUSH_DISTANCE: f32 = 0.6;
    pub const PUSH_EPSILON: f32 = 1e-5;

    /// Progression
    pub const POINTS_PER_LEVEL: u32 = 12;
    pub const ENEMIES_PER_LEVEL: usize = 2;
}

/// Squared distance between two points (collision tests avoid the sqrt)
#[inline]
pub fn distance_squared(a: Vec3, b: Vec3) -> f32 {
    a.distance_squared(b)
}

/// Clamp `x` into `[lo, hi]`
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// Uniform draw from the closed range `[lo, hi]`
#[inline]
pub fn random_in_range<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo >= hi {
        return lo;
    }
    rng.random_range(lo..=hi)
}
