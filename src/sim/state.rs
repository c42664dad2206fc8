//! Game state and core simulation types
//!
//! Everything the simulation owns lives in [`GameState`]. Hosts only read it
//! (or a [`super::Snapshot`] of it) between ticks.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::InputMode;
use super::particles::Particle;
use crate::consts::*;

/// Top-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu (initial, and after every reset)
    #[default]
    Menu,
    /// Controls help screen
    Controls,
    /// Active gameplay
    Playing,
    /// Gameplay frozen
    Paused,
    /// Player died; terminal until restart
    GameOver,
}

/// Title menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    Start,
    Controls,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::Controls, MenuItem::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "Start",
            MenuItem::Controls => "Controls",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Transient things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    PelletEaten { position: Vec3 },
    EnemyEaten { position: Vec3, radius: f32, points: u32 },
    Pushed,
    Dashed,
    LevelUp { level: u32 },
    GameOver { score: u32 },
    Reset,
    QuitRequested,
}

/// The player-controlled cube
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    /// Facing angle in degrees
    pub yaw: f32,
    /// Horizontal velocity (x -> X, y -> Z)
    pub vel: Vec2,
    /// Grows by eating; only reset puts it back
    pub mass: f32,
    pub base_radius: f32,
    /// Seconds until the next dash is allowed
    pub dash_cooldown: f32,
    pub max_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, PLAYER_START_Y, 0.0),
            yaw: 0.0,
            vel: Vec2::ZERO,
            mass: PLAYER_START_MASS,
            base_radius: PLAYER_BASE_RADIUS,
            dash_cooldown: 0.0,
            max_speed: PLAYER_MAX_SPEED,
        }
    }
}

impl Player {
    /// Collision radius, also the visual scale basis
    #[inline]
    pub fn radius(&self) -> f32 {
        self.base_radius * self.scale()
    }

    /// Mass-to-size factor (cube root, so mass behaves like volume)
    #[inline]
    pub fn scale(&self) -> f32 {
        self.mass.cbrt()
    }

    /// Max speed after the mass penalty
    #[inline]
    pub fn current_max_speed(&self) -> f32 {
        self.max_speed / (1.0 + MASS_SPEED_PENALTY * self.mass)
    }
}

/// A moving red cube; edible when smaller, lethal when larger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec3,
    /// Horizontal velocity (x -> X, y -> Z)
    pub vel: Vec2,
    /// Fixed for the enemy's lifetime
    pub radius: f32,
    /// Cosmetic spin, degrees
    pub rotation: f32,
}

/// A static pyramid worth one point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Vec3,
    pub radius: f32,
    /// Cosmetic spin, degrees
    pub rotation: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub score: u32,
    /// 1 while alive, 0 after death
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    /// Highlighted entry in the title menu
    pub menu_index: usize,
    pub input_mode: InputMode,
    /// Mode restored on reset
    pub default_input_mode: InputMode,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub pellets: Vec<Pellet>,
    pub particles: Vec<Particle>,
    /// Hard ceiling on live particles (0 disables effects)
    pub particle_cap: usize,
    /// Simulated ticks since the last reset
    pub time_ticks: u64,
    /// Set once a quit action was accepted; the host should exit
    pub quit_requested: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in the menu with a populated world
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: 1,
            level: 1,
            phase: GamePhase::Menu,
            menu_index: 0,
            input_mode: InputMode::default(),
            default_input_mode: InputMode::default(),
            player: Player::default(),
            enemies: Vec::with_capacity(ENEMY_COUNT),
            pellets: Vec::with_capacity(PELLET_COUNT),
            particles: Vec::new(),
            particle_cap: crate::settings::QualityPreset::default().max_particles(),
            time_ticks: 0,
            quit_requested: false,
            events: Vec::new(),
        };
        state.spawn_world();
        state
    }

    /// Create a session configured from user settings
    pub fn with_settings(seed: u64, settings: &crate::Settings) -> Self {
        let mut state = Self::new(seed);
        state.particle_cap = settings.max_particles();
        state.default_input_mode = settings.input_mode;
        state.input_mode = settings.input_mode;
        state
    }

    /// Currently highlighted menu entry
    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index % MenuItem::ALL.len()]
    }

    /// True once play has begun (including paused and game over)
    pub fn is_started(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Playing | GamePhase::Paused | GamePhase::GameOver
        )
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_menu_active(&self) -> bool {
        self.phase == GamePhase::Menu
    }

    pub fn shows_controls(&self) -> bool {
        self.phase == GamePhase::Controls
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events (host calls this once per frame)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_in_menu_with_full_world() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 1);
        assert_eq!(state.level, 1);
        assert_eq!(state.pellets.len(), PELLET_COUNT);
        assert_eq!(state.enemies.len(), ENEMY_COUNT);
        assert!(state.particles.is_empty());
        assert!(!state.is_started());
    }

    #[test]
    fn effective_radius_follows_cube_root_of_mass() {
        let mut player = Player::default();
        assert!((player.radius() - 0.6).abs() < 1e-6);

        player.mass = 8.0;
        assert!((player.radius() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn heavier_player_is_slower() {
        let mut player = Player::default();
        let light = player.current_max_speed();
        player.mass = 5.0;
        assert!(player.current_max_speed() < light);
        assert!((light - 9.0 / 1.08).abs() < 1e-5);
    }

    #[test]
    fn menu_selection_wraps_index() {
        let mut state = GameState::new(1);
        state.menu_index = 4;
        assert_eq!(state.selected_menu_item(), MenuItem::Controls);
    }

    #[test]
    fn drain_events_empties_queue() {
        let mut state = GameState::new(1);
        state.push_event(GameEvent::Dashed);
        assert_eq!(state.events().len(), 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Dashed]);
        assert!(state.events().is_empty());
    }
}
