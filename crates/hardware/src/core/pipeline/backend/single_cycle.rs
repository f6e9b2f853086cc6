//! Single-cycle ALU.
//!
//! Registers its inputs on one edge, evaluates the whole operation
//! combinationally from the registered operands, and loads the result into
//! the output register on the next edge. A request therefore reaches the
//! output register one edge after it was captured.
//!
//! The input-valid flag is registered alongside the operands and reported
//! with the result, so this variant shares the pipelined variant's port set.
//! Integrations without a valid signal drive it constantly high.

use crate::core::pipeline::latches::{AluInputs, AluOutputs, CaptureEntry};
use crate::core::pipeline::traits::{ClockedAlu, PipelineLatch};
use crate::core::units::alu::Alu;

/// Edges from capture to output for the single-cycle ALU.
pub const SINGLE_CYCLE_LATENCY: usize = 1;

/// Single-cycle ALU state: the input register and the output register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SingleCycleAlu {
    /// Registered operands.
    pub input: CaptureEntry,
    /// Registered result.
    pub output: AluOutputs,
}

impl SingleCycleAlu {
    /// Creates an ALU in the reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Combinational result for the currently registered operands.
    pub const fn evaluate(&self) -> AluOutputs {
        AluOutputs {
            result: Alu::execute(self.input.op, self.input.a, self.input.b),
            valid: self.input.valid,
        }
    }
}

impl ClockedAlu for SingleCycleAlu {
    fn step(&mut self, reset: bool, inputs: AluInputs) -> AluOutputs {
        if reset {
            self.reset();
            return self.output;
        }

        self.output = self.evaluate();
        self.input = inputs.into();
        self.output
    }

    fn output(&self) -> AluOutputs {
        self.output
    }

    fn latency(&self) -> usize {
        SINGLE_CYCLE_LATENCY
    }

    fn reset(&mut self) {
        self.input.flush();
        self.output.flush();
    }
}
