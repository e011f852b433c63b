//! Simulation state: body registry, seeded RNG, population generation
//!
//! The state is the sole owner of the live-body collection. Engine phases
//! only read it per tick and flag bodies dead; additions and the dead sweep
//! happen here, at the tick boundary.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::config::SimConfig;

/// Rectangular arena bounds, origin at the top-left corner. Read-only
/// per-tick parameter supplied by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live bodies (sorted by id for determinism)
    pub bodies: Vec<Body>,
    /// Next entity ID
    next_id: u32,
}

impl SimState {
    /// Create an empty simulation state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a body at the given position and velocity, with an optional
    /// circular bound. Returns the assigned id.
    pub fn spawn(&mut self, pos: Vec2, vel: Vec2, radius: Option<f32>) -> u32 {
        let id = self.next_entity_id();
        let mut body = match radius {
            Some(r) => Body::with_radius(id, r),
            None => Body::new(id),
        };
        body.pos = pos;
        body.vel = vel;
        self.bodies.push(body);
        id
    }

    /// Seed the arena with `config.count` bodies at random positions, each
    /// clamped so its full bound fits inside the arena, with per-axis
    /// velocities in `[-max_speed, max_speed)`.
    ///
    /// Expects a validated config: placement assumes the arena exceeds the
    /// bound diameter on both axes.
    pub fn populate(&mut self, arena: Arena, config: &SimConfig) {
        let mut rng = self.rng_state.to_rng();
        let extent = config.radius * 2.0;

        for _ in 0..config.count {
            let x = rng.random_range(0.0..arena.width - extent);
            let y = rng.random_range(0.0..arena.height - extent);
            let vel = if config.max_speed > 0.0 {
                Vec2::new(
                    rng.random_range(-config.max_speed..config.max_speed),
                    rng.random_range(-config.max_speed..config.max_speed),
                )
            } else {
                Vec2::ZERO
            };
            self.spawn(Vec2::new(x, y), vel, Some(config.radius));
        }

        log::info!(
            "Seeded {} bodies of radius {} in {}x{} arena (seed {})",
            config.count,
            config.radius,
            arena.width,
            arena.height,
            self.seed
        );
    }

    /// Flag a body for removal by id. Returns false if no such body.
    pub fn mark_dead(&mut self, id: u32) -> bool {
        match self.bodies.iter_mut().find(|b| b.id == id) {
            Some(body) => {
                body.mark_dead();
                true
            }
            None => false,
        }
    }

    /// Sweep dead bodies out of the registry. Returns the number removed.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.alive);
        before - self.bodies.len()
    }

    /// Number of live bodies this tick
    pub fn live_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.alive).count()
    }

    /// Ensure bodies are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.bodies.sort_by_key(|b| b.id);
    }
}
