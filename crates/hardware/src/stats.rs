//! Simulation statistics collection and reporting.
//!
//! This module tracks activity at the ALU ports. It provides:
//! 1. **Cycles:** Total clock edges and edges with reset asserted.
//! 2. **Traffic:** Genuine requests versus bubbles accepted at the input.
//! 3. **Operation mix:** Requests per operation code.
//! 4. **Throughput:** Valid results delivered at the output.

use std::fmt;

use crate::core::pipeline::latches::{AluInputs, AluOutputs};
use crate::core::pipeline::signals::AluOp;

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Port activity counters for one simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AluStats {
    /// Total clock edges simulated.
    pub cycles: u64,
    /// Edges on which reset was asserted.
    pub resets: u64,
    /// Valid requests captured at the input.
    pub requests: u64,
    /// Invalid (bubble) inputs captured.
    pub bubbles: u64,
    /// Edges on which the output register held a valid result.
    pub valid_results: u64,
    /// Captured requests per operation, indexed by [`AluOp::index`].
    pub op_counts: [u64; AluOp::ALL.len()],
}

impl AluStats {
    /// Records one clock edge.
    pub const fn record(&mut self, reset: bool, inputs: &AluInputs, outputs: &AluOutputs) {
        self.cycles += 1;
        if reset {
            self.resets += 1;
            return;
        }

        if inputs.valid {
            self.requests += 1;
            self.op_counts[inputs.op.index()] += 1;
        } else {
            self.bubbles += 1;
        }

        if outputs.valid {
            self.valid_results += 1;
        }
    }

    /// Requests captured for `op`.
    pub const fn count(&self, op: AluOp) -> u64 {
        self.op_counts[op.index()]
    }

    /// Fraction of non-reset cycles that delivered a valid result.
    pub fn utilization(&self) -> f64 {
        let active = self.cycles - self.resets;
        if active == 0 {
            0.0
        } else {
            self.valid_results as f64 / active as f64
        }
    }
}

impl fmt::Display for AluStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "ALU SIMULATION STATISTICS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_resets               {}", self.resets)?;
        writeln!(f, "sim_requests             {}", self.requests)?;
        writeln!(f, "sim_bubbles              {}", self.bubbles)?;
        writeln!(f, "sim_valid_results        {}", self.valid_results)?;
        writeln!(f, "sim_utilization          {:.4}", self.utilization())?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "OPERATION MIX")?;
        for op in AluOp::ALL {
            let count = self.count(op);
            if count > 0 {
                writeln!(f, "  op.{:<8}             {count}", op.mnemonic())?;
            }
        }
        write!(f, "{RULE}")
    }
}
