//! Deterministic simulation module
//!
//! All engine logic lives here. This module must be pure and deterministic:
//! - Frame-synchronous, unit-less timestep
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, CollisionBounds};
pub use boundary::apply_walls;
pub use collision::{bodies_overlap, pair_closing, resolve_pair};
pub use state::{Arena, RngState, SimState};
pub use tick::{TickStats, tick};
