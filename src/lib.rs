//! Particle Arena - a headless 2D particle simulation
//!
//! A fixed population of circular bodies drifts inside a rectangular arena,
//! reflecting off the walls and exchanging velocities on pairwise collision.
//!
//! Core modules:
//! - `sim`: deterministic simulation (bodies, wall bounces, pair collisions)
//! - `config`: arena/population setup with validation
//! - `snapshot`: versioned JSON capture and restore of simulation state

pub mod config;
pub mod sim;
pub mod snapshot;

pub use config::{ConfigError, SimConfig};
pub use sim::{Arena, Body, CollisionBounds, SimState, TickStats, tick};

/// Simulation defaults, matching the classic 600x600 demo setup
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Population defaults
    pub const BODY_COUNT: u32 = 100;
    pub const BODY_RADIUS: f32 = 10.0;

    /// Maximum per-axis start speed (arena units per tick)
    pub const MAX_START_SPEED: f32 = 4.0;
}
