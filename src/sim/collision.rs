//! Collision detection and response
//!
//! Both checks use the player's inset hitbox (see [`Player::hitbox`]).

use super::state::{Obstacle, Platform, Player};

/// Land the player on the first platform they dropped onto this tick.
///
/// A landing needs the hitbox to overlap the platform while falling, with
/// the hitbox bottom at or above the platform top before this tick's
/// vertical step. A player already sunk into a platform (e.g. walking into
/// its side) is left alone. Returns true if a landing happened.
pub fn resolve_landing<'a>(
    player: &mut Player,
    platforms: impl IntoIterator<Item = &'a Platform>,
) -> bool {
    let mut landed = false;

    for platform in platforms {
        let hitbox = player.hitbox();
        let top = platform.rect.y;

        if hitbox.intersects(&platform.rect)
            && player.vel.y > 0.0
            && hitbox.bottom() - player.vel.y <= top
        {
            player.stand_on(top);
            player.vel.y = 0.0;
            player.jumping = false;
            landed = true;
        }
    }

    landed
}

/// True if the player's hitbox overlaps any obstacle
pub fn touches_obstacle(player: &Player, obstacles: &[Obstacle]) -> bool {
    let hitbox = player.hitbox();
    obstacles.iter().any(|o| hitbox.intersects(&o.rect))
}
