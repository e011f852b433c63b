//! Simulation snapshots
//!
//! Versioned JSON envelope around [`SimState`] so a run can be captured and
//! restored exactly: same seed, same tick counter, same body set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::SimState;

/// Current envelope version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {0} (expected {SNAPSHOT_VERSION})")]
    Version(u32),
    #[error("snapshot encode/decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    state: SimState,
}

/// Serialize a simulation state into a versioned JSON snapshot.
pub fn encode(state: &SimState) -> Result<String, SnapshotError> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        state: state.clone(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Restore a simulation state from a JSON snapshot.
pub fn decode(json: &str) -> Result<SimState, SnapshotError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::Version(envelope.version));
    }
    log::debug!(
        "Restored snapshot at tick {} with {} bodies",
        envelope.state.time_ticks,
        envelope.state.bodies.len()
    );
    Ok(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::{Arena, tick};

    #[test]
    fn test_snapshot_restores_exact_state() {
        let config = SimConfig {
            seed: 7,
            count: 20,
            ..SimConfig::default()
        };
        let arena = config.arena();
        let mut state = crate::sim::SimState::new(config.seed);
        state.populate(arena, &config);
        for _ in 0..10 {
            tick(&mut state, arena);
        }

        let json = encode(&state).unwrap();
        let restored = decode(&json).unwrap();

        assert_eq!(restored.time_ticks, state.time_ticks);
        assert_eq!(restored.bodies.len(), state.bodies.len());
        for (a, b) in restored.bodies.iter().zip(&state.bodies) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }

    #[test]
    fn test_restored_state_continues_identically() {
        let config = SimConfig::default();
        let arena = Arena::new(config.width, config.height);
        let mut original = crate::sim::SimState::new(3);
        original.populate(arena, &config);

        let mut restored = decode(&encode(&original).unwrap()).unwrap();
        for _ in 0..50 {
            tick(&mut original, arena);
            tick(&mut restored, arena);
        }
        for (a, b) in original.bodies.iter().zip(&restored.bodies) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }

    #[test]
    fn test_rejects_wrong_version() {
        let state = crate::sim::SimState::new(0);
        let json = encode(&state).unwrap().replace("\"version\":1", "\"version\":2");
        assert!(matches!(decode(&json), Err(SnapshotError::Version(2))));
    }

    #[test]
    fn test_rejects_garbage_input() {
        assert!(matches!(decode("not json"), Err(SnapshotError::Json(_))));
    }
}
