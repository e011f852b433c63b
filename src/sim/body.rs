//! Body entity and its circular collision bound
//!
//! A body is a movable, optionally collidable entity: position, per-tick
//! velocity, an optional collision bound, and a liveness flag. It carries no
//! physics of its own beyond displacing itself by its velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::bodies_overlap;

/// Circular collision bound, centered `radius` in from the owning body's
/// top-left anchor on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBounds {
    pub radius: f32,
}

impl CollisionBounds {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// A bound with non-positive radius never reports a collision.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    /// Local offset from the body anchor to the bound center.
    #[inline]
    pub fn center_offset(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    /// Full extent of the bound along one axis.
    #[inline]
    pub fn extent(&self) -> f32 {
        self.radius * 2.0
    }
}

/// A moving, optionally collidable entity.
///
/// `pos` is the top-left anchor in arena coordinates; `vel` is the
/// displacement applied once per tick. A body without a bound still moves
/// and wall-bounces but never collides with another body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounds: Option<CollisionBounds>,
    /// Dead bodies are skipped by every tick phase and swept by the registry.
    pub alive: bool,
}

impl Body {
    /// Body with no collision bound.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            bounds: None,
            alive: true,
        }
    }

    /// Body with a circular bound of the given radius.
    pub fn with_radius(id: u32, radius: f32) -> Self {
        Self {
            bounds: Some(CollisionBounds::new(radius)),
            ..Self::new(id)
        }
    }

    /// Displace position by the current velocity. Mutates position only;
    /// a zero velocity leaves the body exactly where it was.
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Center of the collision bound, if a valid bound exists.
    pub fn center(&self) -> Option<Vec2> {
        self.bounds
            .filter(CollisionBounds::is_valid)
            .map(|b| self.pos + b.center_offset())
    }

    /// Extent of the bound along each axis (0 without a bound).
    pub fn extent(&self) -> f32 {
        self.bounds.map(|b| b.extent()).unwrap_or(0.0)
    }

    /// Strict circle-overlap test against another body. False whenever
    /// either bound is missing or invalid; never mutates either body.
    pub fn collides_with(&self, other: &Body) -> bool {
        bodies_overlap(self, other)
    }

    /// Flag this body for removal. The registry sweeps it at tick end;
    /// nothing is deleted here.
    pub fn mark_dead(&mut self) {
        self.alive = false;
    }
}
