//! Draw commands for one frame

use super::sprite::SpriteFrame;
use crate::sim::Rect;

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Ground,
    Ledge,
    Obstacle,
    Text,
    Confirm,
    Decline,
    Label,
}

impl Color {
    /// CSS color string for canvas backends
    pub fn css(self) -> &'static str {
        match self {
            Color::Ground => "green",
            Color::Ledge => "brown",
            Color::Obstacle | Color::Text => "black",
            Color::Confirm => "green",
            Color::Decline => "red",
            Color::Label => "white",
        }
    }
}

/// A single drawing operation, in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole surface
    Clear,
    FillRect { rect: Rect, color: Color },
    /// Copy `frame` from the sprite atlas into `dest`
    Sprite { frame: SpriteFrame, dest: Rect },
    /// Left-aligned text with its baseline at (x, y)
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

/// Commands for one frame, in paint order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's commands, keeping the allocation
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::FillRect { rect, color });
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) {
        self.push(DrawCmd::Text {
            text: text.into(),
            x,
            y,
            size,
            color,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCmd> {
        self.cmds.iter()
    }
}
