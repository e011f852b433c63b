//! Collision detection and pairwise elastic resolution
//!
//! Detection compares squared center distance against the squared radius sum
//! so the hot pair loop never takes a square root. Resolution is the
//! equal-mass elastic exchange: the two velocity vectors are swapped
//! wholesale, gated by a closing-velocity test so an overlapped pair that is
//! already separating is never reprocessed.

use glam::Vec2;

use super::body::Body;

/// Strict overlap test between two bodies' circular bounds.
///
/// Returns false when either bound is missing or has a non-positive radius.
/// Touching exactly at the radius sum is NOT a collision.
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    let (Some(ba), Some(bb)) = (a.bounds, b.bounds) else {
        return false;
    };
    if !ba.is_valid() || !bb.is_valid() {
        return false;
    }

    let delta = (b.pos + bb.center_offset()) - (a.pos + ba.center_offset());
    let min_dist = ba.radius + bb.radius;
    delta.length_squared() < min_dist * min_dist
}

/// Leading-edge anchor used for the closing-velocity test: the body anchor
/// advanced by the bound's full extent on both axes.
#[inline]
fn leading_anchor(body: &Body) -> Vec2 {
    body.pos + Vec2::splat(body.extent())
}

/// True when the pair is still closing distance: the dot product of relative
/// position (A relative to B) and relative velocity (B relative to A) is
/// positive.
pub fn pair_closing(a: &Body, b: &Body) -> bool {
    let delta = leading_anchor(a) - leading_anchor(b);
    let dv = b.vel - a.vel;
    delta.dot(dv) > 0.0
}

/// Test-and-resolve one unordered pair.
///
/// Swaps the two velocity vectors when the bodies overlap AND are still
/// moving toward each other; returns true only when a swap happened. An
/// overlapped pair that has already exchanged velocities is separating, so
/// calling this again within the same tick is a no-op.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    if !bodies_overlap(a, b) {
        return false;
    }
    if !pair_closing(a, b) {
        return false;
    }

    std::mem::swap(&mut a.vel, &mut b.vel);
    true
}
