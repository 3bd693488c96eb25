//! Sprite atlas frame selection
//!
//! The atlas is a 4x4 grid. The row picks the animation, the column picks
//! the frame. Every animation is a 2-frame cycle; moving animations use
//! columns 2-3 and idle uses columns 0-1.

use crate::sim::{Facing, Player};

/// Atlas grid size (frames per row/column)
pub const ATLAS_GRID: u32 = 4;
/// Ticks between frame advances
pub const TICKS_PER_FRAME: u32 = 12;
/// Frames per animation cycle
pub const FRAMES_PER_CYCLE: u32 = 2;

/// Animation rows in the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle = 0,
    Airborne = 1,
    WalkLeft = 2,
    WalkRight = 3,
}

impl AnimState {
    pub fn for_player(player: &Player) -> Self {
        if player.is_airborne() {
            AnimState::Airborne
        } else if player.vel.x != 0.0 {
            match player.facing {
                Facing::Right => AnimState::WalkRight,
                _ => AnimState::WalkLeft,
            }
        } else {
            AnimState::Idle
        }
    }

    pub fn row(self) -> u32 {
        self as u32
    }

    /// First column of this animation's cycle
    fn column_offset(self) -> u32 {
        match self {
            AnimState::Idle => 0,
            _ => 2,
        }
    }
}

/// Cell in the atlas grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub col: u32,
    pub row: u32,
}

impl SpriteFrame {
    /// Source rectangle for an atlas of the given pixel size
    pub fn source_rect(&self, atlas_width: f32, atlas_height: f32) -> (f32, f32, f32, f32) {
        let w = atlas_width / ATLAS_GRID as f32;
        let h = atlas_height / ATLAS_GRID as f32;
        (self.col as f32 * w, self.row as f32 * h, w, h)
    }
}

/// Per-session animation clock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteAnimator {
    frame_index: u32,
    frame_timer: u32,
}

impl SpriteAnimator {
    /// Tick the clock and pick the frame for the player's current state
    pub fn advance(&mut self, player: &Player) -> SpriteFrame {
        let state = AnimState::for_player(player);

        self.frame_timer += 1;
        if self.frame_timer >= TICKS_PER_FRAME {
            self.frame_index = (self.frame_index + 1) % FRAMES_PER_CYCLE;
            self.frame_timer = 0;
        }

        SpriteFrame {
            col: self.frame_index + state.column_offset(),
            row: state.row(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_selection() {
        let mut player = Player::default();
        assert_eq!(AnimState::for_player(&player), AnimState::Idle);

        player.vel.x = 5.0;
        player.facing = Facing::Right;
        assert_eq!(AnimState::for_player(&player), AnimState::WalkRight);

        player.vel.x = -5.0;
        player.facing = Facing::Left;
        assert_eq!(AnimState::for_player(&player), AnimState::WalkLeft);

        // Falling wins over walking
        player.vel.y = 0.5;
        assert_eq!(AnimState::for_player(&player), AnimState::Airborne);
    }

    #[test]
    fn test_frame_cycles_every_twelve_ticks() {
        let player = Player::default();
        let mut anim = SpriteAnimator::default();

        let cols: Vec<u32> = (0..48).map(|_| anim.advance(&player).col).collect();
        assert!(cols[..11].iter().all(|&c| c == 0));
        assert!(cols[11..23].iter().all(|&c| c == 1));
        assert!(cols[23..35].iter().all(|&c| c == 0));
        assert!(cols[35..47].iter().all(|&c| c == 1));
    }

    #[test]
    fn test_moving_uses_second_half_of_row() {
        let mut player = Player::default();
        player.jumping = true;
        let mut anim = SpriteAnimator::default();
        let frame = anim.advance(&player);
        assert_eq!(frame, SpriteFrame { col: 2, row: 1 });
    }

    #[test]
    fn test_source_rect() {
        let frame = SpriteFrame { col: 3, row: 2 };
        assert_eq!(frame.source_rect(256.0, 256.0), (192.0, 128.0, 64.0, 64.0));
    }
}
