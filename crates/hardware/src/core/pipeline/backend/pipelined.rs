//! Two-stage pipelined ALU.
//!
//! The single-cycle design's longest path is the 5-level barrel shifter. This
//! variant cuts it after the third level:
//!
//! ```text
//!  inputs ──► [capture] ──stage 1──► [complete] ──stage 2──► [output]
//!             a b op valid           fast results             result
//!                                    sll/srl partial          valid
//!                                    fill
//! ```
//!
//! Stage 1 applies shift-amount bits 0–2 and computes every short-path
//! result; Stage 2 applies bits 3–4 and muxes the final result. Results are
//! bit-identical to [`SingleCycleAlu`](super::SingleCycleAlu), one edge later.

use crate::core::pipeline::latches::{AluInputs, AluOutputs, CaptureEntry, CompleteEntry};
use crate::core::pipeline::stages::{capture, complete};
use crate::core::pipeline::traits::{ClockedAlu, PipelineLatch};

/// Edges from capture to output for the pipelined ALU.
pub const PIPELINED_LATENCY: usize = 2;

/// Pipelined ALU state: one register per stage boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelinedAlu {
    /// Stage 1 register (captured inputs).
    pub capture: CaptureEntry,
    /// Stage 1 → Stage 2 register.
    pub complete: CompleteEntry,
    /// Output register.
    pub output: AluOutputs,
}

impl PipelinedAlu {
    /// Creates an ALU in the reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when neither internal register holds a genuine request.
    pub fn is_drained(&self) -> bool {
        self.capture.is_bubble() && self.complete.is_bubble()
    }
}

impl ClockedAlu for PipelinedAlu {
    fn step(&mut self, reset: bool, inputs: AluInputs) -> AluOutputs {
        if reset {
            self.reset();
            return self.output;
        }

        // Stages run in reverse order so each reads its register's pre-edge value.
        self.output = complete::evaluate(&self.complete);
        self.complete = capture::evaluate(&self.capture);
        self.capture = inputs.into();
        self.output
    }

    fn output(&self) -> AluOutputs {
        self.output
    }

    fn latency(&self) -> usize {
        PIPELINED_LATENCY
    }

    fn reset(&mut self) {
        self.capture.flush();
        self.complete.flush();
        self.output.flush();
    }
}
