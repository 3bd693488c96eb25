//! Player integration and world scrolling
//!
//! The player's x is in screen space. Once the player is past the middle of
//! the screen and moving right, the world moves left instead of the player.

use super::state::World;
use crate::Tuning;

/// Scroll the world by the player's rightward velocity once they are past
/// the scroll threshold. Returns the distance scrolled (0 if none).
pub fn scroll(world: &mut World, tuning: &Tuning) -> f32 {
    let speed = world.player.vel.x;
    if world.player.pos.x <= tuning.scroll_threshold() || speed <= 0.0 {
        return 0.0;
    }

    world.offset_x += speed;
    world.player.pos.x -= speed;

    world.ground.rect.x -= speed;
    for ledge in &mut world.ledges {
        ledge.rect.x -= speed;
    }
    for obstacle in &mut world.obstacles {
        obstacle.rect.x -= speed;
    }

    speed
}

/// Widen the ground in fixed steps so it always reaches past the viewport
pub fn extend_ground(world: &mut World, tuning: &Tuning) {
    while world.ground_extend_x < world.offset_x + tuning.viewport_width {
        let next = world.ground_extend_x + tuning.ground_extend_step;
        if next <= world.ground_extend_x {
            log::warn!("Ground step lost to rounding at {:.0}", world.ground_extend_x);
            break;
        }
        world.ground_extend_x = next;
        world.ground.rect.w = world.ground_extend_x;
        log::debug!("Ground extended to {:.0}", world.ground_extend_x);
    }
}

/// Apply gravity and velocity, then keep the player on screen
pub fn integrate(world: &mut World, tuning: &Tuning) {
    let player = &mut world.player;

    // No walking off the left edge
    player.pos.x = player.pos.x.max(0.0);

    player.vel.y += tuning.gravity;
    player.pos += player.vel;

    // Floor of the screen is a hard stop
    let floor = tuning.viewport_height;
    if player.pos.y + player.size.y > floor {
        player.pos.y = floor - player.size.y;
        player.vel.y = 0.0;
        player.jumping = false;
    }
}

/// Drop every ledge and obstacle that has scrolled fully off the left edge
pub fn prune(world: &mut World) {
    let ledges_before = world.ledges.len();
    let obstacles_before = world.obstacles.len();

    world.ledges.retain(|p| !p.rect.is_off_screen_left());
    world.obstacles.retain(|o| !o.rect.is_off_screen_left());

    let removed =
        (ledges_before - world.ledges.len()) + (obstacles_before - world.obstacles.len());
    if removed > 0 {
        log::trace!("Pruned {} off-screen entities", removed);
    }
}
