//! Frame-synchronous simulation tick
//!
//! One tick runs three phases in strict order over the live set: integrate
//! every body, wall-bounce every body, then test-and-resolve every unordered
//! pair. All integration finishes before any collision check runs, so every
//! pairwise test in a tick observes post-motion, pre-resolution positions.
//! Dead bodies are swept at the very end, never mid-phase.

use super::boundary::apply_walls;
use super::collision::resolve_pair;
use super::state::{Arena, SimState};

/// Per-tick counters, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Bodies that reversed on at least one axis at a wall
    pub wall_bounces: u32,
    /// Pairs that exchanged velocities
    pub collisions: u32,
    /// Dead bodies swept out of the registry
    pub removed: usize,
}

impl TickStats {
    pub fn accumulate(&mut self, other: TickStats) {
        self.wall_bounces += other.wall_bounces;
        self.collisions += other.collisions;
        self.removed += other.removed;
    }
}

/// Advance the simulation by one frame.
pub fn tick(state: &mut SimState, arena: Arena) -> TickStats {
    let mut stats = TickStats::default();
    state.time_ticks += 1;

    // Phase 1: motion integration for the whole live set
    for body in state.bodies.iter_mut().filter(|b| b.alive) {
        body.update();
    }

    // Phase 2: wall bounces
    for body in state.bodies.iter_mut().filter(|b| b.alive) {
        if apply_walls(body, arena) {
            stats.wall_bounces += 1;
        }
    }

    // Phase 3: every unordered live pair, once
    for i in 0..state.bodies.len() {
        let (head, tail) = state.bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        if !a.alive {
            continue;
        }
        for b in tail.iter_mut().filter(|b| b.alive) {
            if resolve_pair(a, b) {
                stats.collisions += 1;
            }
        }
    }

    // Dead sweep at the tick boundary; the engine phases only flag
    stats.removed = state.remove_dead();

    if stats.collisions > 0 || stats.wall_bounces > 0 {
        log::trace!(
            "tick {}: {} wall bounces, {} collisions, {} removed",
            state.time_ticks,
            stats.wall_bounces,
            stats.collisions,
            stats.removed
        );
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const ARENA: Arena = Arena {
        width: 600.0,
        height: 600.0,
    };

    #[test]
    fn test_left_wall_scenario_takes_two_ticks() {
        // Radius 10 at (5, 300) moving left at 4/tick
        let mut state = SimState::new(0);
        state.spawn(Vec2::new(5.0, 300.0), Vec2::new(-4.0, 0.0), Some(10.0));

        // Tick 1: x = 1, still >= 0, no bounce yet
        let stats = tick(&mut state, ARENA);
        assert_eq!(stats.wall_bounces, 0);
        assert_eq!(state.bodies[0].pos.x, 1.0);
        assert_eq!(state.bodies[0].vel, Vec2::new(-4.0, 0.0));

        // Tick 2: x = -3, now past the near edge and still outbound
        let stats = tick(&mut state, ARENA);
        assert_eq!(stats.wall_bounces, 1);
        assert_eq!(state.bodies[0].pos.x, -3.0);
        assert_eq!(state.bodies[0].vel, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_head_on_pair_exchanges_velocities() {
        // After integration: A at 105, B at 111, centers 6 apart < 20
        let mut state = SimState::new(0);
        state.spawn(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), Some(10.0));
        state.spawn(Vec2::new(116.0, 100.0), Vec2::new(-5.0, 0.0), Some(10.0));

        let stats = tick(&mut state, ARENA);
        assert_eq!(stats.collisions, 1);
        assert_eq!(state.bodies[0].vel, Vec2::new(-5.0, 0.0));
        assert_eq!(state.bodies[1].vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_overlapped_pair_resolves_once_across_ticks() {
        // Slow closing speeds keep the pair overlapped for several ticks;
        // only the first tick may swap
        let mut state = SimState::new(0);
        state.spawn(Vec2::new(100.0, 100.0), Vec2::new(0.5, 0.0), Some(10.0));
        state.spawn(Vec2::new(110.0, 100.0), Vec2::new(-0.5, 0.0), Some(10.0));

        let stats = tick(&mut state, ARENA);
        assert_eq!(stats.collisions, 1);

        let stats = tick(&mut state, ARENA);
        assert_eq!(stats.collisions, 0);
        assert_eq!(state.bodies[0].vel, Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn test_dead_bodies_are_skipped_and_swept() {
        let mut state = SimState::new(0);
        let id = state.spawn(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), Some(10.0));
        state.spawn(Vec2::new(116.0, 100.0), Vec2::new(-5.0, 0.0), Some(10.0));
        state.mark_dead(id);

        let stats = tick(&mut state, ARENA);
        // Dead body neither moves nor collides, and is gone afterwards
        assert_eq!(stats.collisions, 0);
        assert_eq!(stats.removed, 1);
        assert_eq!(state.bodies.len(), 1);
        assert_eq!(state.bodies[0].pos, Vec2::new(111.0, 100.0));
    }

    #[test]
    fn test_tick_counter_advances() {
        let mut state = SimState::new(0);
        tick(&mut state, ARENA);
        tick(&mut state, ARENA);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_three_way_iteration_covers_all_pairs() {
        // Three bodies stacked close on a line; each adjacent pair closing
        let mut state = SimState::new(0);
        state.spawn(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0), Some(10.0));
        state.spawn(Vec2::new(115.0, 100.0), Vec2::ZERO, Some(10.0));
        state.spawn(Vec2::new(170.0, 100.0), Vec2::new(-2.0, 0.0), Some(10.0));

        let stats = tick(&mut state, ARENA);
        // Only the first pair overlaps after integration
        assert_eq!(stats.collisions, 1);
        assert_eq!(state.bodies[0].vel, Vec2::ZERO);
        assert_eq!(state.bodies[1].vel, Vec2::new(2.0, 0.0));
    }
}
