//! Simulation error definitions.
//!
//! The ALU is a total function and has no error channel of its own; every
//! error here arises at the simulation boundary:
//! 1. **Input Errors:** Unreadable or malformed configuration and stimulus files.
//! 2. **Run Errors:** Cycle limits and lockstep divergence between the two ALU variants.

use std::path::PathBuf;

use crate::core::pipeline::latches::AluOutputs;
use crate::core::pipeline::signals::UnknownMnemonic;

/// Errors reported by the simulation layer.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON did not match the expected schema.
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A stimulus operation code does not fit the 4-bit operation port.
    #[error("operation code {0:#x} does not fit the 4-bit operation port")]
    InvalidOpCode(u64),

    /// A stimulus mnemonic names no ALU operation.
    #[error(transparent)]
    UnknownMnemonic(#[from] UnknownMnemonic),

    /// A variant name on the command line or in a config is not recognised.
    #[error("unknown ALU variant `{0}` (expected `single-cycle` or `pipelined`)")]
    UnknownVariant(String),

    /// The configured cycle budget was exhausted.
    #[error("cycle limit of {0} reached")]
    CycleLimit(u64),

    /// The pipelined ALU diverged from the single-cycle reference.
    #[error(
        "lockstep mismatch at cycle {cycle}: expected {:#010x} (valid={}), got {:#010x} (valid={})",
        expected.result, expected.valid, actual.result, actual.valid
    )]
    Mismatch {
        /// Cycle on which the outputs differed.
        cycle: u64,
        /// Single-cycle output, delayed by one cycle.
        expected: AluOutputs,
        /// Pipelined output.
        actual: AluOutputs,
    },
}

/// Convenience alias for simulation results.
pub type SimResult<T> = Result<T, SimError>;
