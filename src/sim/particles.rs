//! Particle bursts and their lifecycle
//!
//! Purely visual. Particles never affect gameplay.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::random_in_range;

/// A short-lived point sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Seconds remaining; also drives fade-out
    pub life: f32,
    /// RGB in 0-1
    pub color: [f32; 3],
}

/// Which effect a burst belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    /// Warm sparks where something was eaten
    Eat,
    /// White puff behind a dash
    Dash,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, origin: Vec3, kind: BurstKind) -> Self {
        match kind {
            BurstKind::Eat => Self {
                pos: origin,
                vel: Vec3::new(
                    random_in_range(rng, -2.0, 2.0),
                    random_in_range(rng, 1.0, 4.0),
                    random_in_range(rng, -2.0, 2.0),
                ),
                life: random_in_range(rng, 0.5, 1.5),
                color: [1.0, random_in_range(rng, 0.2, 1.0), 0.2],
            },
            BurstKind::Dash => Self {
                pos: origin,
                vel: Vec3::new(
                    random_in_range(rng, -1.0, 1.0),
                    random_in_range(rng, 0.5, 2.0),
                    random_in_range(rng, -1.0, 1.0),
                ),
                life: random_in_range(rng, 0.3, 0.8),
                color: [1.0, 1.0, 1.0],
            },
        }
    }
}

impl GameState {
    /// Emit `count` particles at `origin`, stopping at the particle cap
    pub fn emit_burst(&mut self, origin: Vec3, count: usize, kind: BurstKind) {
        let room = self.particle_cap.saturating_sub(self.particles.len());
        for _ in 0..count.min(room) {
            let particle = Particle::spawn(&mut self.rng, origin, kind);
            self.particles.push(particle);
        }
    }
}

/// Integrate and age particles, dropping the expired ones
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn dash_particles_are_white() {
        let mut rng = Pcg32::seed_from_u64(3);
        let p = Particle::spawn(&mut rng, Vec3::ZERO, BurstKind::Dash);
        assert_eq!(p.color, [1.0, 1.0, 1.0]);
        assert!((0.3..=0.8).contains(&p.life));
    }

    #[test]
    fn eat_particles_rise() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let p = Particle::spawn(&mut rng, Vec3::ZERO, BurstKind::Eat);
            assert!(p.vel.y >= 1.0);
            assert!((0.5..=1.5).contains(&p.life));
        }
    }

    #[test]
    fn expired_particles_are_removed() {
        let mut particles = vec![
            Particle {
                pos: Vec3::ZERO,
                vel: Vec3::new(1.0, 0.0, 0.0),
                life: 0.05,
                color: [1.0; 3],
            },
            Particle {
                pos: Vec3::ZERO,
                vel: Vec3::new(0.0, 2.0, 0.0),
                life: 1.0,
                color: [1.0; 3],
            },
        ];
        update_particles(&mut particles, 0.1);
        assert_eq!(particles.len(), 1);
        assert!((particles[0].pos.y - 0.2).abs() < 1e-6);
        assert!((particles[0].life - 0.9).abs() < 1e-6);
    }

    #[test]
    fn bursts_respect_cap() {
        let mut state = GameState::new(9);
        state.particle_cap = 12;
        state.emit_burst(Vec3::ZERO, 20, BurstKind::Dash);
        assert_eq!(state.particles.len(), 12);
        state.emit_burst(Vec3::ZERO, 5, BurstKind::Eat);
        assert_eq!(state.particles.len(), 12);
    }
}
