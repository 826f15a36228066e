//! A 2D tile-based physics engine for action/platformer games.
//!
//! [`World`] integrates the motion of a bounded set of dynamic
//! axis-aligned-box entities against a static grid of geometry tiles,
//! resolves swept collisions so pushed entities never penetrate solid
//! tiles, reports pairwise collisions between dynamic entities by category,
//! and answers hitscan queries against geometry and entities.
//!
//! A host implements [`DynamicEntity`] for its own entity types, builds a
//! [`World`] over a [`GeometryGrid`], adds entities to it, and drives it
//! either by calling [`World::tick`] directly from its own loop or by
//! spawning [`World::run`] on a dedicated thread.

pub mod collision_phase;
pub mod config;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod geometry_resolver;
pub mod hitscan;
pub mod physics_step;
pub mod swept_aabb;
pub mod vec2;
pub mod world;

pub use config::EngineConfig;
pub use entity::{Category, DynamicEntity, EntityId, MovingCollision, TileAabb};
pub use error::{EngineError, EngineResult};
pub use geometry::{GeometryGrid, GeometryType};
pub use hitscan::{EntityHit, HitscanResult};
pub use swept_aabb::{Normal, SweptAabb};
pub use vec2::Vec2;
pub use world::World;
