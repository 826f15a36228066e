//! 2D double-precision vector and the handful of math helpers the rest of the
//! engine needs: distance, component min/max, and gravity-impulse application.

use cgmath::{InnerSpace, Vector2, Zero};

/// A 2D double-precision pair used for position, speed, half-extents, and
/// tile coordinates promoted to real.
pub type Vec2 = Vector2<f64>;

/// `(0.0, 0.0)`.
pub fn zero() -> Vec2 {
    Vector2::zero()
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (a - b).magnitude()
}

/// Squared euclidean distance; avoids the sqrt when only ordering matters
/// (candidate ordering in [`crate::geometry_resolver`]).
pub fn distance_squared(a: Vec2, b: Vec2) -> f64 {
    (a - b).magnitude2()
}

/// Adds a vertical impulse `dv` to `speed.y`, clamping the result so it never
/// exceeds `terminal_velocity` in the +Y (downward) direction.
///
/// `dv` and `terminal_velocity` are expected to be non-negative; the clamp
/// only ever pulls speed.y back down, it never pushes it up.
pub fn apply_gravity_impulse(speed: Vec2, dv: f64, terminal_velocity: f64) -> Vec2 {
    let mut next = speed;
    next.y += dv;
    if next.y > terminal_velocity {
        next.y = terminal_velocity;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_pythagoras() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gravity_impulse_clamps_to_terminal_velocity() {
        let speed = Vec2::new(1.0, 18.0);
        let next = apply_gravity_impulse(speed, 5.0, 20.0);
        assert_eq!(next.y, 20.0);
        assert_eq!(next.x, 1.0);
    }

    #[test]
    fn gravity_impulse_below_terminal_is_unclamped() {
        let speed = Vec2::new(0.0, 0.0);
        let next = apply_gravity_impulse(speed, 5.0, 20.0);
        assert_eq!(next.y, 5.0);
    }
}
