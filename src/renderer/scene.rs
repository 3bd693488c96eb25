//! World -> draw commands

use super::draw_list::{Color, DrawCmd, DrawList};
use super::sprite::SpriteAnimator;
use crate::Tuning;
use crate::sim::{Rect, Surface, World};

/// Horizontally within the viewport
fn on_screen(rect: &Rect, viewport_width: f32) -> bool {
    rect.right() > 0.0 && rect.x < viewport_width
}

/// Visible platforms, then obstacles, then the player sprite
pub fn draw_world(world: &World, animator: &mut SpriteAnimator, tuning: &Tuning, out: &mut DrawList) {
    for platform in world.platforms() {
        if on_screen(&platform.rect, tuning.viewport_width) {
            let color = match platform.surface {
                Surface::Ground => Color::Ground,
                Surface::Ledge => Color::Ledge,
            };
            out.fill_rect(platform.rect, color);
        }
    }

    for obstacle in &world.obstacles {
        if on_screen(&obstacle.rect, tuning.viewport_width) {
            out.fill_rect(obstacle.rect, Color::Obstacle);
        }
    }

    let frame = animator.advance(&world.player);
    out.push(DrawCmd::Sprite {
        frame,
        dest: world.player.rect(),
    });
}

/// Score readout in the top-right corner
pub fn draw_score(score: f32, tuning: &Tuning, out: &mut DrawList) {
    out.text(
        format!("Score: {}", score.floor()),
        tuning.viewport_width - 150.0,
        30.0,
        24.0,
        Color::Text,
    );
}
