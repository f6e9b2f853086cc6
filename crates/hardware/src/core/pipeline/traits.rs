//! Clocked ALU and Latch Interfaces.
//!
//! This module defines the common traits for the ALU's clocked components. It provides:
//! 1. **Clocked ALU Interface:** Standardizes the per-edge `step` for both timing variants.
//! 2. **Pipeline Latch Interface:** Provides methods for flushing and bubble checks.

use crate::core::pipeline::latches::{AluInputs, AluOutputs};

/// A synchronous ALU advanced one rising clock edge at a time.
///
/// Both timing variants implement this so an integration can swap one for
/// the other. They differ only in [`ClockedAlu::latency`].
pub trait ClockedAlu {
    /// Advances one clock edge.
    ///
    /// With `reset` asserted every register is forced to zero/invalid and
    /// `inputs` are ignored. Otherwise each register loads what its driving
    /// logic produced from the pre-edge state, and `inputs` are captured.
    ///
    /// # Returns
    ///
    /// The output register after the edge.
    fn step(&mut self, reset: bool, inputs: AluInputs) -> AluOutputs;

    /// Current contents of the output register.
    fn output(&self) -> AluOutputs;

    /// Edges between capturing a request and its result reaching the output register.
    fn latency(&self) -> usize;

    /// Forces every register to its reset value.
    fn reset(&mut self);
}

/// Represents a pipeline latch (inter-stage register).
///
/// A latch holds exactly one record and is overwritten on every clock edge;
/// there is no buffering and no backpressure.
pub trait PipelineLatch {
    /// Returns the latch to its reset value.
    fn flush(&mut self);

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if the held record is not a genuine request.
    fn is_bubble(&self) -> bool;
}
