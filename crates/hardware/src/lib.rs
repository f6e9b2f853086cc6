//! RISC-V integer ALU model.
//!
//! This crate models the integer Arithmetic-Logic Unit of a RISC-V-class pipeline, cycle by cycle:
//! 1. **Core:** The combinational ALU (add, sub, and, or, xor, shifts, set-less-than) and
//!    two clocked wrappers: a single-cycle ALU and a two-stage pipelined ALU that splits
//!    the barrel shifter across the stage boundary.
//! 2. **Simulation:** Stimulus traces, a configurable simulator, and a lockstep checker that
//!    proves the pipelined ALU matches the single-cycle reference one edge later.
//! 3. **Support:** Configuration, errors, and port statistics.

/// Common types and constants (datapath width, errors).
pub mod common;
/// Simulator configuration (defaults, variant selection).
pub mod config;
/// ALU core (combinational unit, pipeline registers, stages).
pub mod core;
/// Simulation drivers (stimulus, simulator, lockstep checker).
pub mod sim;
/// Port activity statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The two clocked ALU variants.
pub use crate::core::pipeline::backend::{PipelinedAlu, SingleCycleAlu};
/// Port records.
pub use crate::core::pipeline::latches::{AluInputs, AluOutputs};
/// Operation-code enumeration.
pub use crate::core::pipeline::signals::AluOp;
/// Common interface of both clocked ALUs.
pub use crate::core::pipeline::traits::ClockedAlu;
/// Top-level simulator.
pub use crate::sim::Simulator;
