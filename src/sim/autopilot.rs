//! Demo autopilot
//!
//! Runs right and hops over whatever is coming. Used by the headless
//! runner; good enough to rack up a score, not to play perfectly.

use super::state::World;
use super::tick::{InputState, Key};

/// How far ahead of the hitbox (screen px) an obstacle triggers a jump
const LOOKAHEAD: f32 = 60.0;

/// Fill `input` for the next tick based on the current world
pub fn drive(world: &World, input: &mut InputState) {
    input.press(Key::Right);

    let player = &world.player;
    if player.jumping {
        return;
    }

    let hitbox = player.hitbox();
    let threat = world.obstacles.iter().any(|o| {
        let gap = o.rect.x - hitbox.right();
        // Only obstacles low enough to hit the player from the ground
        let in_lane = o.rect.bottom() > hitbox.y && o.rect.y < hitbox.bottom();
        in_lane && (0.0..LOOKAHEAD).contains(&gap)
    });
    if threat {
        input.press(Key::Jump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Facing, Obstacle, Rect};

    #[test]
    fn test_always_runs_right() {
        let world = World::new(1);
        let mut input = InputState::default();
        drive(&world, &mut input);
        assert_eq!(input.held, Facing::Right);
        assert!(!input.jump);
    }

    #[test]
    fn test_jumps_at_close_obstacle() {
        let mut world = World::new(1);
        let hitbox = world.player.hitbox();
        world.obstacles.push(Obstacle {
            rect: Rect::new(hitbox.right() + 20.0, hitbox.y + 5.0, 30.0, 20.0),
        });
        let mut input = InputState::default();
        drive(&world, &mut input);
        assert!(input.jump);
    }

    #[test]
    fn test_ignores_obstacle_overhead() {
        let mut world = World::new(1);
        let hitbox = world.player.hitbox();
        world.obstacles.push(Obstacle {
            rect: Rect::new(hitbox.right() + 20.0, hitbox.y - 60.0, 30.0, 20.0),
        });
        let mut input = InputState::default();
        drive(&world, &mut input);
        assert!(!input.jump);
    }
}
