//! Per-body trajectory history.
//!
//! A `Trajectory` is an append-only, time-ordered record of one body's
//! motion, kept for external consumers (path rendering, diagnostics). The
//! integrator never prunes; `forget_before` is the external consumer's tool
//! for bounding a rendered trail.

use crate::simulation::states::{NVec3, SystemState};
use crate::simulation::forces::StateObserver;

/// One recorded sample of a body's motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub position: NVec3,
    pub velocity: NVec3,
}

/// Append-only history of `(time, position, velocity)` samples for one body,
/// strictly increasing in time.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Push a new sample. The caller passes owned copies, never live
    /// references into the evolving state, since the integrator keeps
    /// mutating its own vectors after this returns.
    pub fn append(&mut self, time: f64, position: NVec3, velocity: NVec3) {
        self.points.push(TrajectoryPoint {
            time,
            position,
            velocity,
        });
    }

    /// Drop every sample strictly before the first one with `time >= t`.
    ///
    /// No-op when the first sample already qualifies. When NO sample
    /// qualifies the whole history is discarded: a threshold beyond the
    /// recorded range means nothing recorded is recent enough to keep.
    pub fn forget_before(&mut self, t: f64) {
        match self.points.iter().position(|p| p.time >= t) {
            Some(0) => {}
            Some(i) => {
                self.points.drain(..i);
            }
            None => self.points.clear(),
        }
    }

    /// Read-only view of the recorded samples, oldest first.
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Observer that logs one trajectory per body, sampled once per completed
/// integration step. Holds the trajectories so the force law can stay a
/// shared borrow while this takes the mutable one during a solve.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryRecorder {
    trajectories: Vec<Trajectory>,
}

impl TrajectoryRecorder {
    /// A recorder with one empty trajectory per body.
    pub fn new(dimension: usize) -> Self {
        Self {
            trajectories: vec![Trajectory::new(); dimension],
        }
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn trajectories_mut(&mut self) -> &mut [Trajectory] {
        &mut self.trajectories
    }
}

impl StateObserver for TrajectoryRecorder {
    fn observe_state(&mut self, state: &SystemState) {
        for (i, trajectory) in self.trajectories.iter_mut().enumerate() {
            trajectory.append(state.time, state.positions[i], state.velocities[i]);
        }
    }
}
