//! Backend-agnostic rendering
//!
//! The simulation never touches a canvas. Each frame is described as a
//! [`DrawList`] of rectangle fills, one sprite blit and some text, which
//! the host replays onto whatever surface it owns.

pub mod draw_list;
pub mod prompt;
pub mod scene;
pub mod sprite;

pub use draw_list::{Color, DrawCmd, DrawList};
pub use prompt::{ContinuePrompt, PromptChoice};
pub use scene::{draw_score, draw_world};
pub use sprite::{AnimState, SpriteAnimator, SpriteFrame};
