//! Simulation module
//!
//! All gameplay logic lives here. No rendering or windowing:
//! - Input arrives as a [`TickInput`]
//! - Randomness comes from the seeded RNG inside [`GameState`]
//! - Hosts read a [`Snapshot`] and drain [`GameEvent`]s between ticks

pub mod arena;
pub mod collision;
pub mod input;
pub mod particles;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::{Arena, ArenaBox, ArenaPart, move_and_bounce, respawn_inside};
pub use collision::{Contact, classify, overlaps};
pub use input::{InputMode, TickInput};
pub use particles::{BurstKind, Particle};
pub use snapshot::{Hud, Snapshot};
pub use spawn::{make_enemy, make_pellet};
pub use state::{Enemy, GameEvent, GamePhase, GameState, MenuItem, Pellet, Player};
pub use tick::advance;
