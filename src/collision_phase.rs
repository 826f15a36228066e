//! Categorized pairwise collision reporting, run after motion integration.

use crate::entity::{Category, DynamicEntity, EntityId, MovingCollision};
use crate::geometry::GeometryGrid;

/// Reports entity-vs-geometry overlap for entities that are *not*
/// `pushed_by_geometry` (pushed entities are already resolved by
/// [`crate::geometry_resolver`] and, per invariant 1, never end a tick
/// overlapping solid geometry — reporting them here would be redundant).
///
/// A tile counts as "overlapped" whenever it is non-`EMPTY`, directional
/// blockers included: this is a static check with no direction of travel to
/// test a one-way tile against, the same reasoning that resolves the
/// `pointCollidesWithGeometry` open question in §9.3.
pub fn report_geometry_overlaps(entities: &mut [&mut dyn DynamicEntity], grid: &GeometryGrid) {
    for entity in entities.iter_mut() {
        if entity.pushed_by_geometry() {
            continue;
        }
        if overlaps_geometry(&**entity, grid) {
            entity.moving_collision_occurred(MovingCollision { other: None });
        }
    }
}

fn overlaps_geometry(entity: &dyn DynamicEntity, grid: &GeometryGrid) -> bool {
    let loc = entity.loc();
    let min_x = (loc.x - entity.half_width()).floor() as i32;
    let max_x = (loc.x + entity.half_width()).floor() as i32;
    let min_y = (loc.y - entity.half_height()).floor() as i32;
    let max_y = (loc.y + entity.half_height()).floor() as i32;

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            if !grid.get(x, y).is_empty() {
                return true;
            }
        }
    }
    false
}

/// Runs the category-matrix pairwise overlap phase over a flattened,
/// parallel view of every live entity: `entities[k]` is entity `ids[k]` of
/// category `categories[k]`, all three indexed identically and in master
/// insertion order. See [`crate::world::World::tick`] for how the entity
/// arena is flattened into this shape each tick.
///
/// Matrix (see §4.3):
/// - PLAYER tests against ENEMY, ENEMY_PROJECTILE
/// - ENEMY tests against PLAYER_PROJECTILE (PLAYER already covered above)
/// - PLAYER_PROJECTILE / ENEMY_PROJECTILE test against geometry only
///   (handled by [`report_geometry_overlaps`] above)
/// - ENVIRONMENT tests against every other entity in `O`, with the
///   environment-vs-environment rule de-duplicating reciprocal reports.
pub fn run(entities: &mut [&mut dyn DynamicEntity], ids: &[EntityId], categories: &[Category]) {
    let len = entities.len();
    debug_assert_eq!(len, ids.len());
    debug_assert_eq!(len, categories.len());

    for i in 0..len {
        for j in 0..len {
            if i == j {
                continue;
            }
            if !matrix_applies(categories[i], categories[j], i, j) {
                continue;
            }

            let overlapping = {
                let a: &dyn DynamicEntity = &*entities[i];
                let b: &dyn DynamicEntity = &*entities[j];
                a.is_colliding(b)
            };

            if overlapping {
                let other = ids[j];
                entities[i].moving_collision_occurred(MovingCollision { other: Some(other) });
            }
        }
    }
}

/// Whether the ordered pair `(cat_i, cat_j)` at indices `(i, j)` is tested
/// by the category matrix, and whether `i`'s report for it should fire.
///
/// Every matrix cell is inherently symmetric except environment-vs-
/// environment, which only reports from the earlier-inserted entity's
/// iteration (index comparison stands in for insertion order since the
/// caller builds this slice in insertion order).
fn matrix_applies(cat_i: Category, cat_j: Category, i: usize, j: usize) -> bool {
    use Category::*;
    match (cat_i, cat_j) {
        (Player, Enemy) | (Player, EnemyProjectile) => true,
        (Enemy, Player) | (EnemyProjectile, Player) => true,
        (Enemy, PlayerProjectile) | (PlayerProjectile, Enemy) => true,
        (Environment, Environment) => i < j,
        (Environment, _) | (_, Environment) => true,
        _ => false,
    }
}
