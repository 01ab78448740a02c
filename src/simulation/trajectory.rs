//! Position history produced by the integrator
//!
//! `TrajectoryHistory` holds one ordered position sequence per body,
//! indexed by simulation step. Index 0 is the initial condition; index `i`
//! is the integrated position at time `i * dt`. The buffers are filled
//! strictly in increasing index order during the run and are read-only
//! afterwards (the viewer only consumes them).

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct TrajectoryHistory {
    pub primary: Vec<NVec2>, // primary positions, one per step
    pub secondary: Vec<NVec2>, // secondary positions, one per step
}

impl TrajectoryHistory {
    /// Allocate history buffers seeded with the initial positions
    /// `steps` is the final length; capacity is reserved upfront
    pub fn with_initial(x1: NVec2, x2: NVec2, steps: usize) -> Self {
        let mut primary = Vec::with_capacity(steps.max(1));
        let mut secondary = Vec::with_capacity(steps.max(1));
        primary.push(x1);
        secondary.push(x2);
        Self { primary, secondary }
    }

    /// Record both positions for the next step index
    pub fn push(&mut self, x1: NVec2, x2: NVec2) {
        self.primary.push(x1);
        self.secondary.push(x2);
    }

    /// Number of recorded steps (both sequences share this length)
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}
