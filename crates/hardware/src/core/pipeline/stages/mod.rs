//! Pipelined ALU stage logic.
//!
//! Each stage is a pure function from the register it reads to the value
//! the next register loads on the clock edge:
//! 1. **Capture (Stage 1):** Short-path results and the low half of the barrel shift.
//! 2. **Complete (Stage 2):** High half of the barrel shift and the result mux.

/// Stage 1: fast results and partial shifts.
pub mod capture;

/// Stage 2: shift completion and result selection.
pub mod complete;
