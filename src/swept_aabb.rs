//! Continuous-time (swept) intersection of a moving AABB against a single
//! stationary tile, using the standard slab method.

use crate::geometry::GeometryType;
use crate::vec2::Vec2;

/// The surface normal of a resolved swept collision: one axis is ±1, the
/// other is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    pub x: f64,
    pub y: f64,
}

impl Normal {
    const X_POS: Normal = Normal { x: 1.0, y: 0.0 };
    const X_NEG: Normal = Normal { x: -1.0, y: 0.0 };
    const Y_POS: Normal = Normal { x: 0.0, y: 1.0 };
    const Y_NEG: Normal = Normal { x: 0.0, y: -1.0 };
}

/// A resolved swept collision between a moving box and a single tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweptAabb {
    /// Entry time, in `[0, 1]`, as a fraction of the timestep that was swept.
    pub time: f64,
    pub normal: Normal,
    pub tile_x: i32,
    pub tile_y: i32,
}

/// Tests the swept box of an entity centered at `center` with half-extents
/// `(half_width, half_height)` moving by `velocity * dt` against the tile at
/// `(tile_x, tile_y)` of kind `tile_kind`.
///
/// Returns `None` if there is no collision within the timestep, if the tile
/// kind is `EMPTY`, or if a directional tile kind does not block this
/// entity's direction of travel.
#[allow(clippy::too_many_arguments)]
pub fn swept_aabb(
    center: Vec2,
    half_width: f64,
    half_height: f64,
    velocity: Vec2,
    dt: f64,
    tile_x: i32,
    tile_y: i32,
    tile_kind: GeometryType,
) -> Option<SweptAabb> {
    if tile_kind.is_empty() {
        return None;
    }
    let swept_velocity = velocity * dt;
    if !tile_kind.is_solid_against(swept_velocity) {
        return None;
    }

    // Minkowski-expanded tile box.
    let min_x = tile_x as f64 - half_width;
    let max_x = tile_x as f64 + 1.0 + half_width;
    let min_y = tile_y as f64 - half_height;
    let max_y = tile_y as f64 + 1.0 + half_height;

    let (x_enter, x_exit) = match axis_times(center.x, swept_velocity.x, min_x, max_x) {
        Some(t) => t,
        None => return None,
    };
    let (y_enter, y_exit) = match axis_times(center.y, swept_velocity.y, min_y, max_y) {
        Some(t) => t,
        None => return None,
    };

    let entry = x_enter.max(y_enter);
    let exit = x_exit.min(y_exit);

    if entry >= exit || !(0.0..=1.0).contains(&entry) || x_enter > x_exit || y_enter > y_exit {
        return None;
    }

    // Axis with the larger entry time wins; ties go to X. Sign is opposite
    // the velocity on that axis.
    let normal = if x_enter >= y_enter {
        if swept_velocity.x > 0.0 {
            Normal::X_NEG
        } else {
            Normal::X_POS
        }
    } else if swept_velocity.y > 0.0 {
        Normal::Y_NEG
    } else {
        Normal::Y_POS
    };

    Some(SweptAabb {
        time: entry,
        normal,
        tile_x,
        tile_y,
    })
}

/// Per-axis entry/exit time of a point at `origin` moving by `displacement`
/// through the slab `[min, max]`. Returns `None` when the axis velocity is
/// zero and the point already lies outside the slab (no collision possible
/// on this axis, ever).
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
