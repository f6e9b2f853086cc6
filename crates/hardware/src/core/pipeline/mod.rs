//! Clocked ALU pipeline implementation.
//!
//! This module wraps the combinational ALU in registers. It includes:
//! 1. **Backend:** The single-cycle and two-stage pipelined ALUs.
//! 2. **Engine:** Variant selection and enum dispatch.
//! 3. **Latches:** Port records and inter-stage registers.
//! 4. **Signals:** The operation-code enumeration.
//! 5. **Stages:** Stage 1 and Stage 2 combinational logic of the pipelined ALU.
//! 6. **Traits:** Common interfaces for clocked ALUs and latches.

/// Single-cycle and pipelined ALU implementations.
pub mod backend;

/// Variant selection and type-erased dispatch.
pub mod engine;

/// Port records and inter-stage registers.
pub mod latches;

/// ALU operation codes.
pub mod signals;

/// Pipelined ALU stage logic.
pub mod stages;

/// Traits for clocked ALUs and latches.
pub mod traits;
