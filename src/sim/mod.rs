//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-tick constants
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the draw list

pub mod autopilot;
pub mod collision;
pub mod generator;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{resolve_landing, touches_obstacle};
pub use generator::{Spawned, generate_obstacle, generate_platform, populate_ahead};
pub use state::{Facing, GamePhase, Obstacle, Platform, Player, Rect, Surface, World};
pub use tick::{InputState, Key, LoopControl, Session, TickEvents, tick};
