//! A configurable `DynamicEntity` shared by the integration suites, plus a
//! shared collision log so a test can inspect reports after a entity has
//! been moved into a `World`.

use std::sync::{Arc, Mutex};

use tile_physics::{DynamicEntity, MovingCollision, SweptAabb, TileAabb, Vec2};

pub struct TestEntity {
    pub loc: Vec2,
    pub speed: Vec2,
    pub half_width: f64,
    pub half_height: f64,
    pub affected_by_gravity: bool,
    pub pushed_by_geometry: bool,
    pub collisions: Arc<Mutex<Vec<MovingCollision>>>,
}

impl TestEntity {
    pub fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> (Self, Arc<Mutex<Vec<MovingCollision>>>) {
        let collisions = Arc::new(Mutex::new(Vec::new()));
        let entity = Self {
            loc: Vec2::new(x, y),
            speed: Vec2::new(0.0, 0.0),
            half_width,
            half_height,
            affected_by_gravity: false,
            pushed_by_geometry: false,
            collisions: collisions.clone(),
        };
        (entity, collisions)
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.speed = Vec2::new(vx, vy);
        self
    }

    pub fn with_gravity(mut self) -> Self {
        self.affected_by_gravity = true;
        self
    }

    pub fn pushed(mut self) -> Self {
        self.pushed_by_geometry = true;
        self
    }
}

impl DynamicEntity for TestEntity {
    fn loc(&self) -> Vec2 {
        self.loc
    }
    fn speed(&self) -> Vec2 {
        self.speed
    }
    fn half_width(&self) -> f64 {
        self.half_width
    }
    fn half_height(&self) -> f64 {
        self.half_height
    }
    fn affected_by_gravity(&self) -> bool {
        self.affected_by_gravity
    }
    fn pushed_by_geometry(&self) -> bool {
        self.pushed_by_geometry
    }
    fn apply_accelerations(&mut self, _dt: f64) {}
    fn apply_gravity_impulse(&mut self, dv: f64, terminal_velocity: f64) {
        self.speed.y += dv;
        if self.speed.y > terminal_velocity {
            self.speed.y = terminal_velocity;
        }
    }
    fn apply_speeds(&mut self, dt: f64) {
        self.loc += self.speed * dt;
    }
    fn adjust_for_collision(&mut self, collision: &SweptAabb) {
        if collision.normal.y != 0.0 {
            self.speed.y = 0.0;
            self.loc.y = if collision.normal.y > 0.0 {
                collision.tile_y as f64 + 1.0 + self.half_height
            } else {
                collision.tile_y as f64 - self.half_height
            };
        }
        if collision.normal.x != 0.0 {
            self.speed.x = 0.0;
            self.loc.x = if collision.normal.x > 0.0 {
                collision.tile_x as f64 + 1.0 + self.half_width
            } else {
                collision.tile_x as f64 - self.half_width
            };
        }
    }
    fn potential_collision_origin(&self, _dt: f64) -> TileAabb {
        TileAabb {
            min_x: (self.loc.x - self.half_width).floor() as i32,
            min_y: (self.loc.y - self.half_height).floor() as i32,
            max_x: (self.loc.x + self.half_width).floor() as i32,
            max_y: (self.loc.y + self.half_height).floor() as i32,
        }
    }
    fn potential_collision_end(&self, dt: f64) -> TileAabb {
        let end = self.loc + self.speed * dt;
        TileAabb {
            min_x: (end.x - self.half_width).floor() as i32,
            min_y: (end.y - self.half_height).floor() as i32,
            max_x: (end.x + self.half_width).floor() as i32,
            max_y: (end.y + self.half_height).floor() as i32,
        }
    }
    fn moving_collision_occurred(&mut self, collision: MovingCollision) {
        self.collisions.lock().unwrap().push(collision);
    }
}
