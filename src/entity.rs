//! The capability contract a host entity must satisfy to be simulated, and
//! the handle type the engine uses to refer to entities without owning a
//! back-pointer to itself.

use crate::swept_aabb::SweptAabb;
use crate::vec2::Vec2;

/// Entity class, used to pick which interaction-matrix cells apply in
/// [`crate::collision_phase`]. The default category entities are added
/// under is `Environment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Player,
    PlayerProjectile,
    Enemy,
    EnemyProjectile,
    Environment,
}

impl Category {
    /// Maps the wire-level `1..=5` category numbering from §6 onto a
    /// [`Category`]. Returns `None` for anything outside that range, which
    /// the caller turns into [`crate::error::EngineError::InvalidCategory`].
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Category::Player),
            2 => Some(Category::PlayerProjectile),
            3 => Some(Category::Enemy),
            4 => Some(Category::EnemyProjectile),
            5 => Some(Category::Environment),
            _ => None,
        }
    }
}

/// An opaque handle into the engine's entity arena. The engine hands these
/// out from [`crate::world::World::add`] and never exposes a back-pointer
/// from an entity to the engine itself — pairwise collision reports deliver
/// handle pairs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// A tight integer-tile-coordinate AABB, inclusive on both ends, used to
/// bound the set of geometry candidates a swept entity might touch over an
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAabb {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// A pairwise collision report delivered to [`DynamicEntity::moving_collision_occurred`].
///
/// `other` is `None` when the report is an entity-vs-geometry overlap
/// (only possible for entities that are not `pushed_by_geometry`, since
/// pushed entities never end a tick overlapping solid geometry).
#[derive(Debug, Clone, Copy)]
pub struct MovingCollision {
    pub other: Option<EntityId>,
}

/// The capability an opaque dynamic entity must provide for the engine to
/// integrate its motion and report collisions on it.
///
/// Implementations own their own position/velocity/acceleration state; the
/// engine only ever calls through this trait, and never inspects fields
/// directly, so a host can back an entity with any representation it likes.
///
/// `Send` is required because [`crate::world::World`] guards its entity
/// arena with a single `parking_lot::Mutex` rather than pinning the whole
/// engine to one thread (§5: the host may read engine state from other
/// threads between ticks).
pub trait DynamicEntity: Send {
    fn loc(&self) -> Vec2;
    fn speed(&self) -> Vec2;
    fn half_width(&self) -> f64;
    fn half_height(&self) -> f64;

    fn affected_by_gravity(&self) -> bool;
    fn pushed_by_geometry(&self) -> bool;

    /// Integrates this entity's own acceleration state into `speed`. May
    /// implement friction as deceleration. Must cap to the entity's own
    /// limits; the engine does not clamp speed on the entity's behalf
    /// except for the gravity terminal-velocity clamp.
    fn apply_accelerations(&mut self, dt: f64);

    /// Adds a vertical impulse `dv`, clamped so that `speed.y` does not
    /// exceed `terminal_velocity`.
    fn apply_gravity_impulse(&mut self, dv: f64, terminal_velocity: f64);

    /// Advances `loc` by `speed * dt`.
    fn apply_speeds(&mut self, dt: f64);

    /// Given a resolved swept collision against geometry, zeroes `speed`
    /// along the collision normal axis and snaps `loc` along that axis so
    /// the entity exactly touches the blocker face.
    fn adjust_for_collision(&mut self, collision: &SweptAabb);

    /// The integer tile-coordinate AABB tightly bounding this entity's
    /// current box.
    fn potential_collision_origin(&self, dt: f64) -> TileAabb;

    /// The integer tile-coordinate AABB tightly bounding this entity's box
    /// after moving by `speed * dt`.
    fn potential_collision_end(&self, dt: f64) -> TileAabb;

    /// Static AABB overlap against another entity.
    fn is_colliding(&self, other: &dyn DynamicEntity) -> bool {
        let a_min_x = self.loc().x - self.half_width();
        let a_max_x = self.loc().x + self.half_width();
        let a_min_y = self.loc().y - self.half_height();
        let a_max_y = self.loc().y + self.half_height();

        let b_min_x = other.loc().x - other.half_width();
        let b_max_x = other.loc().x + other.half_width();
        let b_min_y = other.loc().y - other.half_height();
        let b_max_y = other.loc().y + other.half_height();

        a_min_x <= b_max_x && a_max_x >= b_min_x && a_min_y <= b_max_y && a_max_y >= b_min_y
    }

    /// Sink for pairwise collision reports, delivered once per ordered pair
    /// per tick (see §4.3 for the environment-vs-environment de-duplication
    /// rule).
    fn moving_collision_occurred(&mut self, collision: MovingCollision);
}
