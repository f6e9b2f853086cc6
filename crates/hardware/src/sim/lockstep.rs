//! Lockstep equivalence checker.
//!
//! Drives a [`SingleCycleAlu`] and a [`PipelinedAlu`] with the same inputs on
//! every edge and checks that the pipelined output equals the single-cycle
//! output from one edge earlier. A one-entry delay register holds the
//! reference output; it is cleared by reset together with both ALUs.

use crate::common::error::{SimError, SimResult};
use crate::core::pipeline::backend::pipelined::PIPELINED_LATENCY;
use crate::core::pipeline::backend::{PipelinedAlu, SingleCycleAlu};
use crate::core::pipeline::latches::{AluInputs, AluOutputs};
use crate::core::pipeline::traits::ClockedAlu;
use crate::sim::stimulus::Stimulus;

/// Summary of a successful lockstep run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockstepReport {
    /// Edges simulated.
    pub cycles: u64,
    /// Edges on which the outputs were compared.
    pub compared: u64,
    /// Compared edges that carried a valid result.
    pub valid_compared: u64,
}

/// Single-cycle reference and pipelined ALU advanced in lockstep.
#[derive(Debug, Default)]
pub struct Lockstep {
    reference: SingleCycleAlu,
    pipelined: PipelinedAlu,
    delayed: AluOutputs,
    report: LockstepReport,
}

impl Lockstep {
    /// Both ALUs in reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances both ALUs one edge and compares their outputs.
    ///
    /// # Returns
    ///
    /// The pipelined ALU's output register after the edge.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Mismatch`] if the pipelined output differs from the
    /// delayed reference output in either result or valid flag.
    pub fn step(&mut self, reset: bool, inputs: AluInputs) -> SimResult<AluOutputs> {
        let cycle = self.report.cycles;
        let expected = if reset {
            AluOutputs::default()
        } else {
            self.delayed
        };

        let actual = self.pipelined.step(reset, inputs);
        self.delayed = self.reference.step(reset, inputs);
        self.report.cycles += 1;

        if actual != expected {
            tracing::warn!(
                cycle,
                expected = expected.result,
                actual = actual.result,
                "pipelined ALU diverged from single-cycle reference"
            );
            return Err(SimError::Mismatch {
                cycle,
                expected,
                actual,
            });
        }

        self.report.compared += 1;
        if actual.valid {
            self.report.valid_compared += 1;
        }
        Ok(actual)
    }

    /// Runs a trace through both ALUs, draining the pipeline afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first [`SimError::Mismatch`] encountered.
    pub fn run(&mut self, stimulus: &Stimulus) -> SimResult<LockstepReport> {
        for step in stimulus.drained(PIPELINED_LATENCY) {
            let _ = self.step(step.reset, step.inputs)?;
        }
        Ok(self.report)
    }

    /// Counters accumulated so far.
    pub const fn report(&self) -> LockstepReport {
        self.report
    }
}

/// Checks a whole trace in a fresh lockstep pair.
///
/// # Errors
///
/// Returns the first [`SimError::Mismatch`] encountered.
pub fn check(stimulus: &Stimulus) -> SimResult<LockstepReport> {
    Lockstep::new().run(stimulus)
}
