//! Simulator: drives one clocked ALU and collects statistics.

use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::pipeline::engine::{AluDispatch, AluVariant};
use crate::core::pipeline::latches::{AluInputs, AluOutputs};
use crate::core::pipeline::traits::ClockedAlu;
use crate::sim::stimulus::Stimulus;
use crate::stats::AluStats;

/// Port values observed on one clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleRecord {
    /// Zero-based edge index.
    pub cycle: u64,
    /// Reset asserted on this edge.
    pub reset: bool,
    /// Inputs presented on this edge.
    pub inputs: AluInputs,
    /// Output register after this edge.
    pub outputs: AluOutputs,
}

/// Top-level simulator: one ALU plus port statistics.
#[derive(Debug)]
pub struct Simulator {
    /// The ALU under simulation.
    pub alu: AluDispatch,
    /// Port activity counters.
    pub stats: AluStats,
    trace: bool,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator for the configured ALU variant, in reset state.
    pub fn new(config: &Config) -> Self {
        Self {
            alu: AluDispatch::new(config.alu.variant),
            stats: AluStats::default(),
            trace: config.general.trace_cycles,
            max_cycles: config.general.max_cycles,
        }
    }

    /// The simulated ALU variant.
    pub const fn variant(&self) -> AluVariant {
        self.alu.variant()
    }

    /// Advances the ALU by one clock edge.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] once `general.max_cycles` edges have run.
    pub fn tick(&mut self, reset: bool, inputs: AluInputs) -> SimResult<AluOutputs> {
        if let Some(limit) = self.max_cycles.filter(|&limit| self.stats.cycles >= limit) {
            return Err(SimError::CycleLimit(limit));
        }

        let cycle = self.stats.cycles;
        let outputs = self.alu.step(reset, inputs);
        self.stats.record(reset, &inputs, &outputs);

        if self.trace {
            if reset {
                tracing::debug!(cycle, "reset");
            } else {
                tracing::debug!(
                    cycle,
                    op = %inputs.op,
                    a = inputs.a,
                    b = inputs.b,
                    in_valid = inputs.valid,
                    result = outputs.result,
                    out_valid = outputs.valid,
                    "tick"
                );
            }
        }

        Ok(outputs)
    }

    /// Runs a whole trace, then drains the ALU with bubbles.
    ///
    /// # Returns
    ///
    /// One record per edge: the trace's edges followed by `latency` drain edges.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] if the cycle budget runs out mid-trace.
    pub fn run(&mut self, stimulus: &Stimulus) -> SimResult<Vec<CycleRecord>> {
        let latency = self.alu.latency();
        tracing::info!(
            variant = %self.variant(),
            edges = stimulus.len(),
            latency,
            "running stimulus"
        );

        let mut records = Vec::with_capacity(stimulus.len() + latency);
        for step in stimulus.drained(latency) {
            let cycle = self.stats.cycles;
            let outputs = self.tick(step.reset, step.inputs)?;
            records.push(CycleRecord {
                cycle,
                reset: step.reset,
                inputs: step.inputs,
                outputs,
            });
        }
        Ok(records)
    }

    /// Forces the ALU into reset outside the normal clocked flow.
    pub fn reset(&mut self) {
        self.alu.reset();
    }
}
