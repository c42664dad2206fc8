//! World generation: initial population, respawns and full reset

use glam::{Vec2, Vec3};
use rand::Rng;

use super::state::{Enemy, GameEvent, GamePhase, Pellet, Player};
use super::GameState;
use crate::consts::*;
use crate::random_in_range;

/// Uniform point inside the arena at height `y`
pub fn random_ground_point<R: Rng>(rng: &mut R, y: f32) -> Vec3 {
    Vec3::new(
        random_in_range(rng, -ARENA_HALF, ARENA_HALF),
        y,
        random_in_range(rng, -ARENA_HALF, ARENA_HALF),
    )
}

/// Roll a fresh enemy.
///
/// Speed shrinks with size and is floored at [`ENEMY_MIN_SPEED`]. Each
/// velocity component is drawn independently from `[-speed, speed]`, so the
/// resulting magnitude is not `speed` itself. That is the intended feel.
pub fn make_enemy<R: Rng>(rng: &mut R) -> Enemy {
    let pos = random_ground_point(rng, ENEMY_Y);
    let rotation = random_in_range(rng, 0.0, 360.0);
    let radius = random_in_range(rng, ENEMY_MIN_RADIUS, ENEMY_MAX_RADIUS);
    let speed = (random_in_range(rng, 3.0, 6.0) * (1.9 - 0.30 * radius)).max(ENEMY_MIN_SPEED);
    let vel = Vec2::new(
        random_in_range(rng, -speed, speed),
        random_in_range(rng, -speed, speed),
    );
    Enemy {
        pos,
        vel,
        radius,
        rotation,
    }
}

pub fn make_pellet<R: Rng>(rng: &mut R) -> Pellet {
    Pellet {
        pos: random_ground_point(rng, PELLET_Y),
        radius: PELLET_RADIUS,
        rotation: random_in_range(rng, 0.0, 360.0),
    }
}

impl GameState {
    /// Clear and repopulate pellets and enemies
    pub fn spawn_world(&mut self) {
        self.pellets.clear();
        self.enemies.clear();
        for _ in 0..PELLET_COUNT {
            let pellet = make_pellet(&mut self.rng);
            self.pellets.push(pellet);
        }
        for _ in 0..ENEMY_COUNT {
            let enemy = make_enemy(&mut self.rng);
            self.enemies.push(enemy);
        }
    }

    /// Add extra enemies on top of the current population
    pub fn spawn_enemies(&mut self, count: usize) {
        for _ in 0..count {
            let enemy = make_enemy(&mut self.rng);
            self.enemies.push(enemy);
        }
    }

    /// Back to the menu with initial score, player and a new world
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = 1;
        self.level = 1;
        self.player = Player::default();
        self.particles.clear();
        self.phase = GamePhase::Menu;
        self.menu_index = 0;
        self.input_mode = self.default_input_mode;
        self.time_ticks = 0;
        self.spawn_world();
        self.push_event(GameEvent::Reset);
        log::info!("Game reset");
    }
}
