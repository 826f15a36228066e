//! Per-entity tile-push resolution: candidate culling, nearest-first
//! ordering, and iterative swept-AABB resolution against the geometry grid.

use crate::entity::DynamicEntity;
use crate::geometry::GeometryGrid;
use crate::swept_aabb::swept_aabb;
use crate::vec2::Vec2;

/// A tile in range of an entity's swept box this tick, together with its
/// squared distance from the entity's current center (used for ordering).
struct Candidate {
    x: i32,
    y: i32,
    distance_squared: f64,
}

/// Runs the full geometry-push resolution for one `pushed_by_geometry`
/// entity: builds the candidate set, orders it nearest-tile-center-first,
/// and resolves collisions in that order, calling back into the entity via
/// [`DynamicEntity::adjust_for_collision`] for each one that hits.
///
/// Does not call `apply_speeds` — integrating position after resolution is
/// [`crate::physics_step`]'s job, so the same entity can be pushed by
/// multiple overlapping tile resolutions before it ever moves.
pub fn resolve(entity: &mut dyn DynamicEntity, grid: &GeometryGrid, dt: f64) {
    let origin = entity.potential_collision_origin(dt);
    let end = entity.potential_collision_end(dt);

    let min_x = origin.min_x.min(end.min_x);
    let max_x = origin.max_x.max(end.max_x);
    let min_y = origin.min_y.min(end.min_y);
    let max_y = origin.max_y.max(end.max_y);

    let center = entity.loc();
    let mut candidates = Vec::new();
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let in_bounds = grid.is_in_bounds(x, y);
            if !in_bounds || !grid.get(x, y).is_empty() {
                let tile_center = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
                candidates.push(Candidate {
                    x,
                    y,
                    distance_squared: crate::vec2::distance_squared(tile_center, center),
                });
            }
        }
    }

    // Nearest tile center first; ties keep insertion order (stable sort).
    candidates.sort_by(|a, b| {
        a.distance_squared
            .partial_cmp(&b.distance_squared)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for candidate in candidates {
        let tile_kind = grid.get(candidate.x, candidate.y);
        let hit = swept_aabb(
            entity.loc(),
            entity.half_width(),
            entity.half_height(),
            entity.speed(),
            dt,
            candidate.x,
            candidate.y,
            tile_kind,
        );
        if let Some(collision) = hit {
            entity.adjust_for_collision(&collision);
        }
    }
}
