//! Simulation drivers.
//!
//! This module runs the clocked ALUs against input sequences:
//! 1. **Stimulus:** Per-cycle input traces loaded from JSON.
//! 2. **Simulator:** Drives one configured ALU and gathers statistics.
//! 3. **Lockstep:** Runs both variants side by side and checks equivalence.

/// Lockstep equivalence checker for the two ALU variants.
pub mod lockstep;

/// Single-ALU simulator.
pub mod simulator;

/// Stimulus trace loading.
pub mod stimulus;

pub use lockstep::{Lockstep, LockstepReport};
pub use simulator::{CycleRecord, Simulator};
pub use stimulus::{Stimulus, StimulusStep};
