//! Wall bounce policy
//!
//! One-dimensional elastic reflection against the arena edges. Each axis is
//! checked independently, so a corner hit flips both components in the same
//! tick. The correction applies to velocity only: position is never clamped,
//! which means a fast body can sit outside the arena for one tick before the
//! reversed velocity carries it back in.

use glam::Vec2;

use super::body::Body;
use super::state::Arena;

/// Check a body against the arena walls and negate any velocity component
/// that is still pushing outward past an edge. Returns true if either axis
/// flipped.
///
/// The far-edge test uses the body's leading edge (anchor plus bound
/// extent); the near-edge test uses the anchor itself. A body that has
/// already reversed and is moving back inward is left alone, so a single
/// crossing can never flip the same axis twice.
pub fn apply_walls(body: &mut Body, arena: Arena) -> bool {
    let lead = body.pos + Vec2::splat(body.extent());
    let mut bounced = false;

    if (lead.x > arena.width && body.vel.x > 0.0) || (body.pos.x < 0.0 && body.vel.x < 0.0) {
        body.vel.x = -body.vel.x;
        bounced = true;
    }

    if (lead.y > arena.height && body.vel.y > 0.0) || (body.pos.y < 0.0 && body.vel.y < 0.0) {
        body.vel.y = -body.vel.y;
        bounced = true;
    }

    bounced
}
