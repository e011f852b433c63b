//! Simulation configuration
//!
//! Arena dimensions and population parameters, validated once at setup time
//! so the per-tick engine never has to check geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Arena;

/// Rejected configuration, surfaced at population-generation time rather
/// than as a per-frame engine fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("body radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("population must be at least 1")]
    EmptyPopulation,
    #[error("max speed must be non-negative, got {0}")]
    NegativeMaxSpeed(f32),
    #[error("arena {width}x{height} cannot fit a body of radius {radius}")]
    ArenaTooSmall {
        width: f32,
        height: f32,
        radius: f32,
    },
}

/// Simulation setup parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena width in arena units
    pub width: f32,
    /// Arena height in arena units
    pub height: f32,
    /// Number of bodies to seed
    pub count: u32,
    /// Collision-bound radius shared by all seeded bodies
    pub radius: f32,
    /// Maximum per-axis start speed (units per tick)
    pub max_speed: f32,
    /// RNG seed for reproducible populations
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            count: BODY_COUNT,
            radius: BODY_RADIUS,
            max_speed: MAX_START_SPEED,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Arena bounds described by this config
    pub fn arena(&self) -> Arena {
        Arena::new(self.width, self.height)
    }

    /// Validate setup parameters before population generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_speed < 0.0 {
            return Err(ConfigError::NegativeMaxSpeed(self.max_speed));
        }
        // A full bound must fit inside the arena on both axes
        if self.width <= self.radius * 2.0 || self.height <= self.radius * 2.0 {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                radius: self.radius,
            });
        }
        Ok(())
    }
}
