//! Clocked ALU backends.
//!
//! Two interchangeable timing models wrap the same combinational ALU:
//! - [`single_cycle::SingleCycleAlu`]: input register, full combinational
//!   evaluation, output register.
//! - [`pipelined::PipelinedAlu`]: the barrel shifter split across two stages,
//!   one extra cycle of latency.

/// Two-stage pipelined ALU.
pub mod pipelined;

/// Single-cycle reference ALU.
pub mod single_cycle;

pub use pipelined::PipelinedAlu;
pub use single_cycle::SingleCycleAlu;
