//! Engine-wide configuration surface (§6, §10.3).
//!
//! The geometry grid is not part of this struct: it is mutable host-owned
//! state supplied separately to [`crate::world::World::new`], not static
//! configuration.

/// Tunables that apply uniformly across every entity in a [`crate::world::World`].
///
/// `gravity` and `terminal_velocity` feed [`crate::physics_step::run`] each
/// tick; `run_flag` gates [`crate::world::World::tick`] itself (§7 —
/// disabling it makes every `tick` call a silent no-op, distinct from
/// `terminate_flag`, which only stops the [`crate::world::World::run`]
/// driver loop).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub gravity: f64,
    pub terminal_velocity: f64,
    pub run_flag: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: 0.0,
            terminal_velocity: f64::INFINITY,
            run_flag: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_gravity_disabled_and_run_enabled() {
        let config = EngineConfig::default();
        assert_eq!(config.gravity, 0.0);
        assert!(config.run_flag);
    }
}
