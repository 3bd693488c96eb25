//! Side Runner - An endless side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, generation, collisions)
//! - `renderer`: Backend-agnostic draw list, sprite animation, game over prompt
//! - `platform`: Browser/native input abstraction
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Render surface dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal speed while an arrow key is held
    pub const RUN_SPEED: f32 = 5.0;
    /// Upward impulse applied on jump
    pub const JUMP_SPEED: f32 = 12.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 250.0;
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// Hitbox insets (shared by landing and death checks)
    pub const HITBOX_SIDE_INSET: f32 = 5.0;
    pub const HITBOX_BOTTOM_INSET: f32 = 16.0;

    /// Ground defaults
    pub const GROUND_TOP: f32 = 350.0;
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Ground width grows in these increments
    pub const GROUND_EXTEND_STEP: f32 = 800.0;

    /// Height of every generated platform/obstacle (also the vertical probe height)
    pub const SPAWN_HEIGHT: f32 = 20.0;
    /// First spawn frontier (world x)
    pub const FIRST_SPAWN_X: f32 = 800.0;

    /// Distance travelled per score point
    pub const DISTANCE_PER_POINT: f32 = 10.0;
}
