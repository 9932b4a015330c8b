//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable slot order (fixed obstacle array)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_box, player_hits_field};
pub use field::ObstacleField;
pub use state::{GamePhase, GameState, Obstacle, Trail};
pub use tick::{GameEvent, TickInput, tick};
