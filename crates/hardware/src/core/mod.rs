//! ALU core.
//!
//! This module contains the combinational ALU and the clocked pipeline
//! machinery that wraps it in its two timing variants.

/// Clocked ALU variants (latches, stages, signals, dispatch).
pub mod pipeline;

/// Combinational execution units.
pub mod units;
