//! Execution units.
//!
//! This module contains the combinational integer ALU. The clocked wrappers
//! in [`crate::core::pipeline`] add registers around it.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
