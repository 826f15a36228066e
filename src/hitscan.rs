//! Ray-like queries against geometry and entities (§4.4).
//!
//! A hitscan is not a unit-vector ray: `distance` is the full displacement
//! to sweep, and the reported `time` is a fraction of that displacement in
//! `[0, 1)`, not a world-space length.

use crate::entity::{Category, EntityId};
use crate::geometry::{GeometryGrid, GeometryType};
use crate::vec2::Vec2;

/// The nearest entity a hitscan struck, and at what fraction of `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityHit {
    pub entity: EntityId,
    pub time: f64,
}

/// The combined result of [`crate::world::World::calculate_hitscan`]:
/// the nearest entity hit (if any, and if the scan type allows it) plus the
/// geometry impact, always present since geometry hitscan never fails —
/// it just returns `distance` unchanged when nothing is struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitscanResult {
    pub first_entity: Option<EntityHit>,
    pub geometry_impact: Vec2,
}

/// Whether an entity of `candidate`'s category is eligible to be tested by
/// a hitscan of the given `scan_type`, per the skip table in §4.4.
pub fn is_eligible(scan_type: Category, candidate: Category) -> bool {
    use Category::*;
    match scan_type {
        Player | PlayerProjectile => candidate != Player,
        Enemy | EnemyProjectile => candidate != Enemy,
        Environment => true,
    }
}

/// The entry time, in `[0, 1)`, at which a zero-sized point at `origin`
/// moving by `distance` first enters the AABB centered at `center` with the
/// given half-extents. `None` if it never enters within the swept interval.
pub fn point_vs_box(
    origin: Vec2,
    distance: Vec2,
    center: Vec2,
    half_width: f64,
    half_height: f64,
) -> Option<f64> {
    let min_x = center.x - half_width;
    let max_x = center.x + half_width;
    let min_y = center.y - half_height;
    let max_y = center.y + half_height;

    let (x_enter, x_exit) = axis_times(origin.x, distance.x, min_x, max_x)?;
    let (y_enter, y_exit) = axis_times(origin.y, distance.y, min_y, max_y)?;

    let entry = x_enter.max(y_enter);
    let exit = x_exit.min(y_exit);

    if entry < exit && (0.0..1.0).contains(&entry) && x_enter <= x_exit && y_enter <= y_exit {
        Some(entry)
    } else {
        None
    }
}

fn axis_times(origin: f64, displacement: f64, min: f64, max: f64) -> Option<(f64, f64)> {
    if displacement == 0.0 {
        if origin < min || origin > max {
            return None;
        }
        return Some((f64::NEG_INFINITY, f64::INFINITY));
    }
    let t1 = (min - origin) / displacement;
    let t2 = (max - origin) / displacement;
    if t1 <= t2 {
        Some((t1, t2))
    } else {
        Some((t2, t1))
    }
}

/// Steps along the ray from `origin` by `distance`, one tile-unit per step
/// along whichever axis has the larger magnitude, sampling the tile under
/// the truncated point at each step. Returns the first offset (relative to
/// `origin`) at which the sampled tile is out-of-bounds or `FULL`; returns
/// `distance` unchanged if nothing is hit.
///
/// Non-`FULL`, non-`EMPTY` tiles (the directional blockers) are
/// intentionally transparent to hitscan geometry. This is the
/// "tile-imprecise" variant: it does not compute the sub-tile intersection
/// with the hit face, only which tile was first entered.
pub fn geometry_impact(origin: Vec2, distance: Vec2, grid: &GeometryGrid) -> Vec2 {
    let magnitude = distance.x.abs().max(distance.y.abs());
    if magnitude == 0.0 {
        return distance;
    }

    // Step count keeps the source's off-box `+ 1` (§9 open question 4):
    // one more step than the tile-count along the dominant axis strictly
    // requires, preserved for behavioral parity.
    let steps = magnitude.ceil() as i64 + 1;
    let step = Vec2::new(distance.x / steps as f64, distance.y / steps as f64);

    let mut point = origin;
    for _ in 0..steps {
        point += step;
        let tile_x = point.x.floor() as i32;
        let tile_y = point.y.floor() as i32;
        if grid.get(tile_x, tile_y) == GeometryType::Full {
            return point - origin;
        }
    }
    distance
}
