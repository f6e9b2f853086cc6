//! Common types used throughout the ALU simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Datapath width, sign-bit position, and shift-amount mask.
//! 2. **Error Handling:** The simulation-layer error type.

/// Datapath-wide constants.
pub mod constants;

/// Error types for the simulation layer.
pub mod error;

pub use constants::{SHAMT_MASK, SIGN_SHIFT, XLEN};
pub use error::{SimError, SimResult};
