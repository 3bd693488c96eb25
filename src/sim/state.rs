//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in [`World`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Player touched an obstacle; waiting on the continue prompt
    GameOver,
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test; rectangles that only share an edge don't intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Inclusive point containment (used for click hit regions)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// True once the rectangle is entirely left of the screen
    #[inline]
    pub fn is_off_screen_left(&self) -> bool {
        self.right() <= 0.0
    }
}

/// Horizontal facing, driven by which arrow is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Idle,
    Right,
}

impl Facing {
    /// -1, 0 or 1
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Idle => 0.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x is screen space, y is world space
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub jumping: bool,
    pub facing: Facing,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            jumping: false,
            facing: Facing::Idle,
        }
    }
}

impl Player {
    /// Full sprite rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Collision box: inset on the sides and the bottom, top left as-is
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.pos.x + HITBOX_SIDE_INSET,
            self.pos.y,
            self.size.x - 2.0 * HITBOX_SIDE_INSET,
            self.size.y - HITBOX_BOTTOM_INSET,
        )
    }

    /// Place the player so the hitbox bottom sits exactly on `top`
    pub fn stand_on(&mut self, top: f32) {
        self.pos.y = top - self.size.y + HITBOX_BOTTOM_INSET;
    }

    /// In the air: either mid-jump or falling
    pub fn is_airborne(&self) -> bool {
        self.jumping || self.vel.y > 0.0
    }
}

/// Platform color tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Ground,
    Ledge,
}

/// A solid platform the player can land on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub surface: Surface,
}

impl Platform {
    pub fn ground(width: f32) -> Self {
        Self {
            rect: Rect::new(0.0, GROUND_TOP, width, GROUND_HEIGHT),
            surface: Surface::Ground,
        }
    }

    pub fn ledge(x: f32, y: f32, width: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, SPAWN_HEIGHT),
            surface: Surface::Ledge,
        }
    }
}

/// A lethal block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    /// Always present and never pruned; only ever grows wider
    pub ground: Platform,
    /// Transient ledges in spawn order
    pub ledges: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    /// Total distance scrolled
    pub offset_x: f32,
    /// World x of the next spawn point
    pub spawn_x: f32,
    /// Ground width threshold
    pub ground_extend_x: f32,
    /// Generator RNG; survives restarts so each run gets a fresh layout
    pub rng: Pcg32,
}

impl World {
    /// Create a fresh world with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    fn with_rng(rng: Pcg32) -> Self {
        Self {
            player: Player::default(),
            ground: Platform::ground(FIRST_SPAWN_X),
            ledges: vec![
                Platform::ledge(200.0, 250.0, 150.0),
                Platform::ledge(500.0, 200.0, 100.0),
            ],
            obstacles: Vec::new(),
            offset_x: 0.0,
            spawn_x: FIRST_SPAWN_X,
            ground_extend_x: FIRST_SPAWN_X,
            rng,
        }
    }

    /// Put everything except the RNG stream back to the starting layout
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(rng);
    }

    /// Every platform, ground first
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        std::iter::once(&self.ground).chain(self.ledges.iter())
    }

    pub fn platform_count(&self) -> usize {
        1 + self.ledges.len()
    }

    /// Distance-based score
    pub fn score(&self) -> f32 {
        self.offset_x / DISTANCE_PER_POINT
    }
}
