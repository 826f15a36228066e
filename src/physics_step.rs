//! Tick integration: per-entity accelerations, gravity, geometry push
//! resolution, and position advance.

use crate::entity::DynamicEntity;
use crate::geometry::GeometryGrid;
use crate::geometry_resolver;

/// Runs one tick's worth of motion integration over every entity in `O`
/// (the caller passes the flattened master list).
///
/// Order per entity: `apply_accelerations` → gravity impulse (if
/// `affected_by_gravity`) → geometry push resolution (if
/// `pushed_by_geometry`) → `apply_speeds`. Every entity completes this
/// sequence before [`crate::collision_phase`] evaluates any pairwise
/// overlap, per the ordering guarantee in §5.
pub fn run(entities: &mut [&mut dyn DynamicEntity], grid: &GeometryGrid, gravity: f64, terminal_velocity: f64, dt: f64) {
    for entity in entities.iter_mut() {
        entity.apply_accelerations(dt);

        if entity.affected_by_gravity() {
            entity.apply_gravity_impulse(gravity * dt, terminal_velocity);
        }

        if entity.pushed_by_geometry() {
            geometry_resolver::resolve(entity.as_mut(), grid, dt);
        }

        entity.apply_speeds(dt);
    }
}
