//! Procedural platform/obstacle generation
//!
//! New entities are appended at the spawn frontier, just past the right
//! edge of the viewport. Vertical placement avoids the ground band.

use std::ops::Range;

use rand::Rng;

use super::state::{Obstacle, Platform, Rect, World};
use crate::Tuning;
use crate::consts::SPAWN_HEIGHT;

/// Pick a y in `band` such that a `SPAWN_HEIGHT` tall probe at y doesn't
/// overlap `ground` vertically.
///
/// Samples the allowed sub-ranges directly, which gives the same uniform
/// distribution as retrying until a clear spot comes up but always
/// terminates. Returns `None` when the ground covers the whole band.
pub fn sample_clear_y<R: Rng>(rng: &mut R, band: &Range<f32>, ground: &Rect) -> Option<f32> {
    // y is blocked when y + SPAWN_HEIGHT > ground.y && y < ground.bottom()
    let blocked_from = ground.y - SPAWN_HEIGHT;
    let blocked_to = ground.bottom();

    let above = band.start..band.end.min(blocked_from);
    let below = band.start.max(blocked_to)..band.end;

    let above_len = (above.end - above.start).max(0.0);
    let below_len = (below.end - below.start).max(0.0);
    let total = above_len + below_len;
    if total <= 0.0 {
        return None;
    }

    let t = rng.random_range(0.0..total);
    let y = if t < above_len {
        above.start + t
    } else {
        below.start + (t - above_len)
    };
    Some(y)
}

/// Generate a ledge with its left edge at screen x `x`
pub fn generate_platform<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    ground: &Rect,
    x: f32,
) -> Option<Platform> {
    let Some(y) = sample_clear_y(rng, &tuning.spawn_band, ground) else {
        log::warn!(
            "Ground {:?} covers spawn band {:?}, no platform generated",
            ground,
            tuning.spawn_band
        );
        return None;
    };
    let width = rng.random_range(tuning.platform_width.clone());
    Some(Platform::ledge(x, y, width))
}

/// Generate an obstacle at screen x `x`, or `None` if it would overlap any
/// of `platforms` (or can't be placed clear of the ground)
pub fn generate_obstacle<'a, R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    ground: &Rect,
    x: f32,
    platforms: impl IntoIterator<Item = &'a Platform>,
) -> Option<Obstacle> {
    let y = sample_clear_y(rng, &tuning.spawn_band, ground)?;
    let width = rng.random_range(tuning.obstacle_width.clone());
    let rect = Rect::new(x, y, width, SPAWN_HEIGHT);

    if platforms.into_iter().any(|p| rect.intersects(&p.rect)) {
        log::trace!("Obstacle at x={:.0} y={:.0} overlaps a platform, skipped", x, y);
        return None;
    }
    Some(Obstacle { rect })
}

/// What `populate_ahead` added this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spawned {
    pub platforms: u32,
    pub obstacles: u32,
}

/// Fill the world up to one viewport past the scroll offset.
///
/// Each pass spawns a ledge at the frontier and then tries an obstacle
/// there too. The frontier is kept in world space; entities are placed in
/// screen space.
pub fn populate_ahead(world: &mut World, tuning: &Tuning) -> Spawned {
    let mut spawned = Spawned::default();

    while world.spawn_x < world.offset_x + tuning.viewport_width {
        let frontier = world.spawn_x;
        if !spawn_pass(world, tuning, &mut spawned) {
            // Degenerate tuning; nothing can ever be placed
            break;
        }
        if world.spawn_x <= frontier {
            log::warn!("Spawn frontier stuck at {:.0}", frontier);
            break;
        }
    }

    spawned
}

/// One ledge at the frontier plus an obstacle attempt right after it.
/// Returns false if no ledge could be placed.
fn spawn_pass(world: &mut World, tuning: &Tuning, spawned: &mut Spawned) -> bool {
    let screen_x = world.spawn_x - world.offset_x;
    let ground = world.ground.rect;

    let Some(platform) = generate_platform(&mut world.rng, tuning, &ground, screen_x) else {
        return false;
    };
    log::debug!(
        "Platform spawned at world x={:.0} y={:.0} w={:.0}",
        world.spawn_x,
        platform.rect.y,
        platform.rect.w
    );
    world.ledges.push(platform);
    world.spawn_x += world.rng.random_range(tuning.platform_spacing.clone());
    spawned.platforms += 1;

    let screen_x = world.spawn_x - world.offset_x;
    let obstacle = generate_obstacle(
        &mut world.rng,
        tuning,
        &ground,
        screen_x,
        std::iter::once(&world.ground).chain(world.ledges.iter()),
    );
    if let Some(obstacle) = obstacle {
        log::debug!(
            "Obstacle spawned at world x={:.0} y={:.0} w={:.0}",
            world.spawn_x,
            obstacle.rect.y,
            obstacle.rect.w
        );
        world.obstacles.push(obstacle);
        world.spawn_x += world.rng.random_range(tuning.obstacle_spacing.clone());
        spawned.obstacles += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GROUND_HEIGHT, GROUND_TOP};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ground() -> Rect {
        Rect::new(0.0, GROUND_TOP, 800.0, GROUND_HEIGHT)
    }

    fn overlaps_ground(y: f32, ground: &Rect) -> bool {
        y + SPAWN_HEIGHT > ground.y && y < ground.bottom()
    }

    #[test]
    fn test_sample_covered_band_is_none() {
        let mut rng = Pcg32::seed_from_u64(1);
        let wide_ground = Rect::new(0.0, 100.0, 800.0, 400.0);
        assert_eq!(sample_clear_y(&mut rng, &(150.0..350.0), &wide_ground), None);
    }

    #[test]
    fn test_sample_uses_band_below_ground() {
        // Ground sits in the middle of the band; both sides must be reachable
        let mut rng = Pcg32::seed_from_u64(3);
        let mid_ground = Rect::new(0.0, 240.0, 800.0, 20.0);
        let band = 150.0..350.0;
        let mut saw_above = false;
        let mut saw_below = false;
        for _ in 0..500 {
            let y = sample_clear_y(&mut rng, &band, &mid_ground).unwrap();
            assert!(band.contains(&y));
            assert!(!overlaps_ground(y, &mid_ground));
            saw_above |= y < 240.0;
            saw_below |= y >= 260.0;
        }
        assert!(saw_above && saw_below);
    }

    #[test]
    fn test_platform_dimensions() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        for _ in 0..200 {
            let p = generate_platform(&mut rng, &tuning, &ground(), 640.0).unwrap();
            assert_eq!(p.rect.x, 640.0);
            assert_eq!(p.rect.h, 20.0);
            assert!((50.0..150.0).contains(&p.rect.w));
        }
    }

    #[test]
    fn test_obstacle_rejected_on_overlap() {
        let mut rng = Pcg32::seed_from_u64(9);
        let tuning = Tuning::default();
        // A wall of ledge covering the whole spawn band at this x
        let wall = Platform {
            rect: Rect::new(0.0, 100.0, 400.0, 300.0),
            surface: crate::sim::Surface::Ledge,
        };
        for _ in 0..50 {
            assert!(generate_obstacle(&mut rng, &tuning, &ground(), 100.0, [&wall]).is_none());
        }
    }

    #[test]
    fn test_obstacle_touching_platform_is_allowed() {
        let mut rng = Pcg32::seed_from_u64(11);
        let tuning = Tuning::default();
        // Ledge ends exactly where the obstacle starts
        let ledge = Platform::ledge(0.0, 150.0, 100.0);
        let obstacle = generate_obstacle(&mut rng, &tuning, &ground(), 100.0, [&ledge]);
        assert!(obstacle.is_some());
    }

    #[test]
    fn test_populate_noop_before_scrolling() {
        let mut world = World::new(1);
        let spawned = populate_ahead(&mut world, &Tuning::default());
        assert_eq!(spawned, Spawned::default());
        assert_eq!(world.platform_count(), 3);
        assert_eq!(world.spawn_x, 800.0);
    }

    #[test]
    fn test_populate_covers_viewport() {
        let tuning = Tuning::default();
        let mut world = World::new(21);
        world.offset_x = 5.0;
        let spawned = populate_ahead(&mut world, &tuning);

        assert!(spawned.platforms >= 1);
        assert!(world.spawn_x >= world.offset_x + tuning.viewport_width);
        // First ledge lands at the frontier, converted to screen space
        let first_new = &world.ledges[2];
        assert_eq!(first_new.rect.x, 795.0);
    }

    /// Run the populate loop pass by pass, pairing each new obstacle with
    /// the platforms that existed when it was placed
    fn populate_with_snapshots(
        world: &mut World,
        tuning: &Tuning,
    ) -> Vec<(Obstacle, Vec<Platform>)> {
        let mut placed = Vec::new();
        let mut spawned = Spawned::default();
        while world.spawn_x < world.offset_x + tuning.viewport_width {
            let obstacles = world.obstacles.len();
            let mut present: Vec<Platform> = world.platforms().cloned().collect();
            assert!(spawn_pass(world, tuning, &mut spawned));
            // The ledge from this same pass is checked too
            present.extend(world.ledges.last().cloned());
            if let Some(obstacle) = world.obstacles.get(obstacles) {
                placed.push((obstacle.clone(), present));
            }
        }
        placed
    }

    #[test]
    fn test_populate_stops_when_frontier_cannot_move() {
        let tuning = Tuning::default();
        let mut world = World::new(3);
        // f32 spacing is 65536 out here, so every advance rounds away
        world.offset_x = 1.0e12;
        world.spawn_x = 1.0e12 - 262_144.0;
        let spawned = populate_ahead(&mut world, &tuning);
        assert_eq!(spawned.platforms, 1);
    }

    proptest! {
        #[test]
        fn prop_generated_entities_avoid_ground_and_platforms(seed in any::<u64>(), offset in 5.0f32..20_000.0) {
            let tuning = Tuning::default();
            let mut world = World::new(seed);
            world.offset_x = offset;
            world.spawn_x = offset - 5.0 + 800.0;

            let before_spawn = world.spawn_x;
            let checked = populate_with_snapshots(&mut world, &tuning);
            prop_assert!(world.spawn_x >= before_spawn);
            prop_assert!(world.spawn_x >= world.offset_x + tuning.viewport_width);

            let ground = world.ground.rect;
            for p in world.ledges.iter().skip(2) {
                prop_assert!(!overlaps_ground(p.rect.y, &ground));
            }
            prop_assert_eq!(checked.len(), world.obstacles.len());
            for (o, present) in &checked {
                prop_assert!(!overlaps_ground(o.rect.y, &ground));
                for p in present {
                    prop_assert!(!o.rect.intersects(&p.rect));
                }
            }
        }
    }
}
