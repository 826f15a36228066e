//! Minimal Platformer Example
//!
//! Demonstrates the simplest possible use of `tile_physics` as a library: a
//! host-defined player entity falling onto a floor under gravity, driven by
//! direct `tick` calls rather than the `World::run` driver loop.
//!
//! For the category-matrix and hitscan surfaces, see the crate's
//! `tests/scenarios.rs` integration suite.

use tile_physics::{
    Category, DynamicEntity, EngineConfig, GeometryType, MovingCollision, SweptAabb, TileAabb,
    Vec2, World,
};

struct Player {
    loc: Vec2,
    speed: Vec2,
    half_width: f64,
    half_height: f64,
}

impl Player {
    fn new(x: f64, y: f64) -> Self {
        Self {
            loc: Vec2::new(x, y),
            speed: Vec2::new(0.0, 0.0),
            half_width: 0.4,
            half_height: 0.4,
        }
    }
}

impl DynamicEntity for Player {
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
        true
    }

    fn pushed_by_geometry(&self) -> bool {
        true
    }

    fn apply_accelerations(&mut self, _dt: f64) {
        // No player-driven acceleration in this demo; a real host would
        // apply input-driven horizontal thrust and friction here.
    }

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
        if collision.normal.x != 0.0 {
            self.speed.x = 0.0;
            self.loc.x = if collision.normal.x > 0.0 {
                collision.tile_x as f64 + 1.0 + self.half_width
            } else {
                collision.tile_x as f64 - self.half_width
            };
        }
        if collision.normal.y != 0.0 {
            self.speed.y = 0.0;
            self.loc.y = if collision.normal.y > 0.0 {
                collision.tile_y as f64 + 1.0 + self.half_height
            } else {
                collision.tile_y as f64 - self.half_height
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
        match collision.other {
            Some(other) => log::info!("[Player::moving_collision_occurred] hit entity {other:?}"),
            None => log::info!("[Player::moving_collision_occurred] overlapping geometry"),
        }
    }
}

fn main() {
    env_logger::init();

    let world = World::new(10, 5, EngineConfig { gravity: 10.0, terminal_velocity: 20.0, run_flag: true });
    for x in 0..10 {
        world.set_geometry(x, 4, GeometryType::Full);
    }

    let player = world.add_with_category(Box::new(Player::new(5.0, 0.5)), Category::Player);

    for frame in 0..30 {
        world.tick(16);
        if frame % 10 == 0 {
            println!("frame {frame}: touching_floor = {}", world.touching_floor(player));
        }
    }

    println!("cycles per second (driver-mode only): {}", world.cps());
}
