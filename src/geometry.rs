//! The static tile grid the engine pushes entities against.

use crate::vec2::Vec2;

/// The kind of a single tile.
///
/// `EMPTY` and `FULL` are the two "plain" kinds. The four `BLOCKS_*`
/// variants are one-way blockers: they act solid only against an entity
/// whose velocity crosses the named face from the blocking direction. Since
/// +Y is down in this engine's coordinate system, `BLOCKS_UP` is solid only
/// to entities moving upward (negative `speed.y`), `BLOCKS_DOWN` only to
/// entities moving downward, and so on for the horizontal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Empty,
    Full,
    BlocksLeft,
    BlocksRight,
    BlocksUp,
    BlocksDown,
}

impl GeometryType {
    /// Whether this tile kind ever participates in collision, independent
    /// of velocity. `EMPTY` never does; everything else might.
    pub fn is_empty(self) -> bool {
        matches!(self, GeometryType::Empty)
    }

    /// Whether this tile kind is solid against an entity moving with the
    /// given velocity. `FULL` is solid unconditionally; directional tiles
    /// are solid only when `velocity`'s sign on the blocked axis matches
    /// the blocker's direction; `EMPTY` is never solid.
    pub fn is_solid_against(self, velocity: Vec2) -> bool {
        match self {
            GeometryType::Empty => false,
            GeometryType::Full => true,
            GeometryType::BlocksLeft => velocity.x < 0.0,
            GeometryType::BlocksRight => velocity.x > 0.0,
            GeometryType::BlocksUp => velocity.y < 0.0,
            GeometryType::BlocksDown => velocity.y > 0.0,
        }
    }
}

/// A width × height matrix of [`GeometryType`], indexed `[x][y]`.
///
/// Mutation is the host's responsibility and is not expected to race with a
/// tick; the tick treats the grid as read-only. Out-of-bounds lookups
/// behave as `FULL` per the boundary rule in §7.
#[derive(Debug, Clone)]
pub struct GeometryGrid {
    width: usize,
    height: usize,
    tiles: Vec<GeometryType>,
}

impl GeometryGrid {
    /// Builds a grid of the given dimensions, every tile `EMPTY`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![GeometryType::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` is within the grid's bounds.
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The tile kind at `(x, y)`. Out-of-bounds coordinates return `FULL`.
    pub fn get(&self, x: i32, y: i32) -> GeometryType {
        if !self.is_in_bounds(x, y) {
            return GeometryType::Full;
        }
        self.tiles[x as usize * self.height + y as usize]
    }

    /// Sets the tile kind at `(x, y)`. Out-of-bounds writes are ignored —
    /// the host is expected to stay within `width()`/`height()`, and a
    /// silent no-op here matches the boundary rule's "no error surfaced"
    /// policy rather than panicking on a host mistake.
    pub fn set(&mut self, x: i32, y: i32, kind: GeometryType) {
        if self.is_in_bounds(x, y) {
            self.tiles[x as usize * self.height + y as usize] = kind;
        }
    }

    /// A point is considered "inside geometry" when its tile is non-`EMPTY`.
    /// This includes directional blockers per the open question in §9.3:
    /// the source falls through to `true` for one-way tiles too, since a
    /// point has no velocity to test a direction against.
    pub fn point_collides(&self, point: Vec2) -> bool {
        let tx = point.x.floor() as i32;
        let ty = point.y.floor() as i32;
        !self.get(tx, ty).is_empty()
    }
}
