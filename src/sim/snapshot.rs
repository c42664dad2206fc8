//! Read-only view of the game for renderers and HUDs

use glam::Vec3;
use serde::Serialize;

use super::input::InputMode;
use super::state::{GamePhase, GameState, MenuItem};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerPose {
    pub position: Vec3,
    /// Degrees
    pub yaw: f32,
    /// Collision radius
    pub radius: f32,
    /// Visual scale (cube root of mass)
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyPose {
    pub position: Vec3,
    pub rotation: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PelletPose {
    pub position: Vec3,
    pub rotation: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub position: Vec3,
    pub color: [f32; 3],
    /// Remaining seconds; use for alpha
    pub life: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub mass: f32,
    pub input_mode: InputMode,
    pub phase: GamePhase,
    /// Highlighted entry, only while the menu is open
    pub menu_index: Option<usize>,
    pub menu_items: [&'static str; 3],
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: PlayerPose,
    pub enemies: Vec<EnemyPose>,
    pub pellets: Vec<PelletPose>,
    pub particles: Vec<ParticleView>,
    pub hud: Hud,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: PlayerPose {
                position: self.player.pos,
                yaw: self.player.yaw,
                radius: self.player.radius(),
                scale: self.player.scale(),
            },
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyPose {
                    position: e.pos,
                    rotation: e.rotation,
                    radius: e.radius,
                })
                .collect(),
            pellets: self
                .pellets
                .iter()
                .map(|p| PelletPose {
                    position: p.pos,
                    rotation: p.rotation,
                })
                .collect(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    position: p.pos,
                    color: p.color,
                    life: p.life,
                })
                .collect(),
            hud: Hud {
                score: self.score,
                lives: self.lives,
                level: self.level,
                mass: self.player.mass,
                input_mode: self.input_mode,
                phase: self.phase,
                menu_index: self.is_menu_active().then_some(self.menu_index),
                menu_items: MenuItem::ALL.map(|item| item.label()),
            },
        }
    }
}
