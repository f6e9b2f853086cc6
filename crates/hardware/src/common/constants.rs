//! Global Datapath Constants.
//!
//! This module defines the datapath-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Register width and sign-bit position.
//! 2. **Shifter Constants:** Shift-amount field mask.

/// Datapath width in bits.
pub const XLEN: u32 = 32;

/// Position of the sign bit; `x >> SIGN_SHIFT` isolates it.
pub const SIGN_SHIFT: u32 = XLEN - 1;

/// Bit mask for the shift amount taken from operand B (5 bits: 0-31).
pub const SHAMT_MASK: u32 = 0x1F;
