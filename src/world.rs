//! Ownership of the geometry grid and entity arena, the add/remove queue,
//! and the tick/run driver (§4.5).

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::collision_phase;
use crate::config::EngineConfig;
use crate::entity::{Category, DynamicEntity, EntityId};
use crate::error::{EngineError, EngineResult};
use crate::geometry::{GeometryGrid, GeometryType};
use crate::hitscan::{self, EntityHit, HitscanResult};
use crate::physics_step;
use crate::vec2::Vec2;

/// A live entity slot: the boxed capability object plus the category it was
/// added under. Slots are never reused once tombstoned — `EntityId` values
/// are append-only indices into [`Inner::entities`], matching the "stable
/// index with tombstoning" option noted in §9.
struct Slot {
    entity: Box<dyn DynamicEntity>,
    category: Category,
}

struct Inner {
    entities: Vec<Option<Slot>>,
    pending_removal: Vec<EntityId>,
    grid: GeometryGrid,
    gravity: f64,
    terminal_velocity: f64,
    run_flag: bool,
}

/// Owns the geometry grid and every dynamic entity added to it, and drives
/// ticks. Guarded by a single `parking_lot::Mutex` per §5 and §9: a tick is
/// one exclusive critical section, matching the source's per-tick
/// synchronization intent without requiring per-entity locks.
pub struct World {
    inner: Mutex<Inner>,
    terminate_flag: AtomicBool,
    cps: AtomicU32,
}

impl World {
    /// Builds a world over a `width` x `height` geometry grid, every tile
    /// initially `EMPTY`, and the given configuration.
    pub fn new(width: usize, height: usize, config: EngineConfig) -> Self {
        log::info!(
            "[World::new] {}x{} grid, gravity={}, terminal_velocity={}",
            width,
            height,
            config.gravity,
            config.terminal_velocity
        );
        Self {
            inner: Mutex::new(Inner {
                entities: Vec::new(),
                pending_removal: Vec::new(),
                grid: GeometryGrid::new(width, height),
                gravity: config.gravity,
                terminal_velocity: config.terminal_velocity,
                run_flag: config.run_flag,
            }),
            terminate_flag: AtomicBool::new(false),
            cps: AtomicU32::new(0),
        }
    }

    /// Adds `entity` under the default category, `ENVIRONMENT` (§3).
    pub fn add(&self, entity: Box<dyn DynamicEntity>) -> EntityId {
        self.add_with_category(entity, Category::Environment)
    }

    /// Adds `entity` under an explicit [`Category`].
    pub fn add_with_category(&self, entity: Box<dyn DynamicEntity>, category: Category) -> EntityId {
        let mut inner = self.inner.lock();
        let id = EntityId::from_index(inner.entities.len());
        log::info!("[World::add_with_category] id={:?} category={:?}", id, category);
        inner.entities.push(Some(Slot { entity, category }));
        id
    }

    /// Adds `entity` under the wire-level `1..=5` category numbering from
    /// §6. Returns [`EngineError::InvalidCategory`] for anything outside
    /// that range — a programmer error, per §7.
    pub fn add_with_category_index(
        &self,
        entity: Box<dyn DynamicEntity>,
        category_index: u8,
    ) -> EngineResult<EntityId> {
        let category = Category::from_index(category_index)
            .ok_or(EngineError::InvalidCategory { category: category_index })?;
        Ok(self.add_with_category(entity, category))
    }

    /// Enqueues `id` for removal. Removal is deferred: the entity remains
    /// live (and visible to collision reporting) for the remainder of the
    /// current tick, and is dropped only when the tick's drain step runs.
    pub fn remove(&self, id: EntityId) {
        let mut inner = self.inner.lock();
        log::info!("[World::remove] id={:?} (deferred)", id);
        inner.pending_removal.push(id);
    }

    /// Runs one tick: motion integration, then categorized pairwise
    /// collision reporting, then the deferred-removal drain. A
    /// non-positive `dt_millis`, or a disabled run flag, is a silent
    /// no-op (§7 — `TransientNoOp`, never an error).
    pub fn tick(&self, dt_millis: i64) {
        if dt_millis <= 0 {
            log::warn!("[World::tick] ignoring non-positive dt_millis={dt_millis}");
            return;
        }

        let mut inner = self.inner.lock();
        if !inner.run_flag {
            log::debug!("[World::tick] run_flag disabled, skipping");
            return;
        }

        let dt = dt_millis as f64 / 1000.0;
        log::debug!(
            "[World::tick] dt={dt:.4}s entities={}",
            inner.entities.iter().filter(|s| s.is_some()).count()
        );

        let gravity = inner.gravity;
        let terminal_velocity = inner.terminal_velocity;

        {
            let mut refs: Vec<&mut dyn DynamicEntity> = inner
                .entities
                .iter_mut()
                .filter_map(|slot| slot.as_mut().map(|s| s.entity.as_mut()))
                .collect();
            physics_step::run(&mut refs, &inner.grid, gravity, terminal_velocity, dt);
        }

        let mut refs: Vec<&mut dyn DynamicEntity> = Vec::new();
        let mut ids: Vec<EntityId> = Vec::new();
        let mut categories: Vec<Category> = Vec::new();
        for (index, slot) in inner.entities.iter_mut().enumerate() {
            if let Some(slot) = slot {
                refs.push(slot.entity.as_mut());
                ids.push(EntityId::from_index(index));
                categories.push(slot.category);
            }
        }

        collision_phase::report_geometry_overlaps(&mut refs, &inner.grid);
        collision_phase::run(&mut refs, &ids, &categories);
        drop(refs);

        for id in inner.pending_removal.drain(..) {
            if let Some(slot) = inner.entities.get_mut(id.index()) {
                if slot.take().is_some() {
                    log::info!("[World::tick] draining id={:?}", id);
                }
            }
        }
    }

    /// Drives ticks from a monotonic clock until [`World::terminate`] is
    /// called, yielding between iterations. A host may instead step the
    /// world directly with [`World::tick`]; `run` is a convenience driver,
    /// not a requirement.
    pub fn run(&self) {
        self.terminate_flag.store(false, Ordering::SeqCst);
        log::info!("[World::run] driver loop starting");

        let mut last = Instant::now();
        let mut window_start = last;
        let mut window_count: u32 = 0;

        while !self.terminate_flag.load(Ordering::SeqCst) {
            let now = Instant::now();
            let dt_millis = now.duration_since(last).as_millis() as i64;
            last = now;

            self.tick(dt_millis);
            window_count += 1;

            if now.duration_since(window_start) >= Duration::from_secs(1) {
                self.cps.store(window_count, Ordering::SeqCst);
                window_count = 0;
                window_start = now;
            }

            std::thread::yield_now();
        }
        log::info!("[World::run] driver loop terminated");
    }

    /// Signals a running [`World::run`] driver loop to exit before its next
    /// tick. In-flight tick work is not interrupted (§5).
    pub fn terminate(&self) {
        self.terminate_flag.store(true, Ordering::SeqCst);
    }

    /// Cycles-per-second, refreshed at ~1 second intervals by [`World::run`].
    pub fn cps(&self) -> u32 {
        self.cps.load(Ordering::SeqCst)
    }

    // -- Configuration getters/setters (§6) --

    pub fn gravity(&self) -> f64 {
        self.inner.lock().gravity
    }

    pub fn set_gravity(&self, gravity: f64) {
        self.inner.lock().gravity = gravity;
    }

    pub fn terminal_velocity(&self) -> f64 {
        self.inner.lock().terminal_velocity
    }

    pub fn set_terminal_velocity(&self, terminal_velocity: f64) {
        self.inner.lock().terminal_velocity = terminal_velocity;
    }

    pub fn run_flag(&self) -> bool {
        self.inner.lock().run_flag
    }

    pub fn set_run_flag(&self, run_flag: bool) {
        self.inner.lock().run_flag = run_flag;
    }

    // -- Geometry queries (§6) --

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        self.inner.lock().grid.is_in_bounds(x, y)
    }

    /// Out-of-bounds coordinates return `FULL` (§3's boundary rule).
    pub fn get_geometry_type(&self, x: i32, y: i32) -> GeometryType {
        self.inner.lock().grid.get(x, y)
    }

    pub fn set_geometry(&self, x: i32, y: i32, kind: GeometryType) {
        self.inner.lock().grid.set(x, y, kind);
    }

    /// Whether `point` falls inside a non-`EMPTY` tile.
    pub fn point_collides_with_geometry(&self, point: Vec2) -> bool {
        self.inner.lock().grid.point_collides(point)
    }

    /// Whether `id`'s current AABB overlaps any non-`EMPTY` tile, the same
    /// static check [`World::tick`] uses to report overlap for entities
    /// that are not `pushed_by_geometry`.
    pub fn is_colliding_with_geometry(&self, id: EntityId) -> bool {
        let inner = self.inner.lock();
        let Some(Some(slot)) = inner.entities.get(id.index()) else {
            return false;
        };
        let loc = slot.entity.loc();
        let half_width = slot.entity.half_width();
        let half_height = slot.entity.half_height();
        let min_x = (loc.x - half_width).floor() as i32;
        let max_x = (loc.x + half_width).floor() as i32;
        let min_y = (loc.y - half_height).floor() as i32;
        let max_y = (loc.y + half_height).floor() as i32;
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                if !inner.grid.get(x, y).is_empty() {
                    return true;
                }
            }
        }
        false
    }

    /// Whether the tile immediately below `id`'s AABB is solid against
    /// downward motion.
    pub fn touching_floor(&self, id: EntityId) -> bool {
        self.touching(id, 0.0, 1.0)
    }

    /// Whether the tile immediately above `id`'s AABB is solid against
    /// upward motion.
    pub fn touching_ceiling(&self, id: EntityId) -> bool {
        self.touching(id, 0.0, -1.0)
    }

    /// Whether the tile immediately to the left of `id`'s AABB is solid
    /// against leftward motion.
    pub fn touching_left_wall(&self, id: EntityId) -> bool {
        self.touching(id, -1.0, 0.0)
    }

    /// Whether the tile immediately to the right of `id`'s AABB is solid
    /// against rightward motion.
    pub fn touching_right_wall(&self, id: EntityId) -> bool {
        self.touching(id, 1.0, 0.0)
    }

    fn touching(&self, id: EntityId, dx: f64, dy: f64) -> bool {
        const EPSILON: f64 = 1e-6;
        let inner = self.inner.lock();
        let Some(Some(slot)) = inner.entities.get(id.index()) else {
            return false;
        };
        let loc = slot.entity.loc();
        let half_width = slot.entity.half_width();
        let half_height = slot.entity.half_height();

        let (tile_x, tile_y) = if dx != 0.0 {
            let edge = if dx > 0.0 { loc.x + half_width } else { loc.x - half_width };
            let x = if dx > 0.0 { (edge + EPSILON).floor() } else { (edge - EPSILON).floor() };
            (x as i32, loc.y.floor() as i32)
        } else {
            let edge = if dy > 0.0 { loc.y + half_height } else { loc.y - half_height };
            let y = if dy > 0.0 { (edge + EPSILON).floor() } else { (edge - EPSILON).floor() };
            (loc.x.floor() as i32, y as i32)
        };

        inner.grid.get(tile_x, tile_y).is_solid_against(Vec2::new(dx, dy))
    }

    /// Summarizes adjacent-tile blockage as a `{x, y}` pair, each in
    /// `{-1, 0, 1}`. Per §6/§9, this is documented in the source as
    /// unreliable for entities with half-extent greater than `0.5` — it
    /// samples one neighbor tile per face and is not hardened further here.
    pub fn get_ortho_geometry_collision_normals(&self, id: EntityId) -> (i32, i32) {
        let x = if self.touching_left_wall(id) {
            -1
        } else if self.touching_right_wall(id) {
            1
        } else {
            0
        };
        let y = if self.touching_ceiling(id) {
            -1
        } else if self.touching_floor(id) {
            1
        } else {
            0
        };
        (x, y)
    }

    // -- Hitscan (§4.4) --

    /// Entity + geometry hitscan against the default scan type, `ENVIRONMENT`
    /// (skips nothing).
    pub fn calculate_hitscan(&self, origin: Vec2, distance: Vec2) -> HitscanResult {
        self.calculate_hitscan_with_category(origin, distance, Category::Environment)
    }

    pub fn calculate_hitscan_with_category(
        &self,
        origin: Vec2,
        distance: Vec2,
        scan_type: Category,
    ) -> HitscanResult {
        let inner = self.inner.lock();
        let first_entity = nearest_entity_hit(&inner, origin, distance, scan_type);
        let geometry_impact = hitscan::geometry_impact(origin, distance, &inner.grid);
        HitscanResult { first_entity, geometry_impact }
    }

    /// Wire-level entry point taking a `1..=5` scan type index (§6).
    pub fn calculate_hitscan_by_index(
        &self,
        origin: Vec2,
        distance: Vec2,
        scan_type_index: u8,
    ) -> EngineResult<HitscanResult> {
        let scan_type = Category::from_index(scan_type_index)
            .ok_or(EngineError::InvalidScanType { index: scan_type_index })?;
        Ok(self.calculate_hitscan_with_category(origin, distance, scan_type))
    }

    pub fn get_hitscan_impact(&self, origin: Vec2, distance: Vec2, scan_type: Category) -> Option<EntityHit> {
        let inner = self.inner.lock();
        nearest_entity_hit(&inner, origin, distance, scan_type)
    }

    pub fn get_hitscan_impact_geometry(&self, origin: Vec2, distance: Vec2) -> Vec2 {
        let inner = self.inner.lock();
        hitscan::geometry_impact(origin, distance, &inner.grid)
    }
}

fn nearest_entity_hit(inner: &Inner, origin: Vec2, distance: Vec2, scan_type: Category) -> Option<EntityHit> {
    let mut best: Option<EntityHit> = None;
    for (index, slot) in inner.entities.iter().enumerate() {
        let Some(slot) = slot else { continue };
        if !hitscan::is_eligible(scan_type, slot.category) {
            continue;
        }
        let time = hitscan::point_vs_box(
            origin,
            distance,
            slot.entity.loc(),
            slot.entity.half_width(),
            slot.entity.half_height(),
        );
        if let Some(time) = time {
            if best.map(|b| time < b.time).unwrap_or(true) {
                best = Some(EntityHit { entity: EntityId::from_index(index), time });
            }
        }
    }
    best
}
