//! "Game Over. Continue?" prompt
//!
//! Two buttons centered under the title. Clicks are hit-tested against the
//! same rectangles that get drawn.

use super::draw_list::{Color, DrawList};
use crate::sim::Rect;

const BUTTON_WIDTH: f32 = 100.0;
const BUTTON_HEIGHT: f32 = 40.0;

/// Player's answer to the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Restart,
    Exit,
}

/// Layout of the continue prompt for a given surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuePrompt {
    width: f32,
    height: f32,
}

impl ContinuePrompt {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn restart_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 - 150.0,
            self.height / 2.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn exit_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 + 50.0,
            self.height / 2.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// Which button (if any) contains the point; edges count as inside
    pub fn hit_test(&self, x: f32, y: f32) -> Option<PromptChoice> {
        if self.restart_button().contains(x, y) {
            Some(PromptChoice::Restart)
        } else if self.exit_button().contains(x, y) {
            Some(PromptChoice::Exit)
        } else {
            None
        }
    }

    pub fn draw(&self, out: &mut DrawList) {
        out.text(
            "Game Over. Continue?",
            self.width / 2.0 - 240.0,
            self.height / 2.0 - 40.0,
            48.0,
            Color::Text,
        );

        let yes = self.restart_button();
        out.fill_rect(yes, Color::Confirm);
        out.text("Yes", yes.x + 30.0, yes.y + 30.0, 24.0, Color::Label);

        let no = self.exit_button();
        out.fill_rect(no, Color::Decline);
        out.text("No", no.x + 30.0, no.y + 30.0, 24.0, Color::Label);
    }
}
