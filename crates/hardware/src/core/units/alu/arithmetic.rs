//! ALU arithmetic operations.
//!
//! Implements 32-bit wrapping addition and subtraction. Overflow is not
//! reported; results simply wrap modulo 2^32.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Add` or `Sub`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => add(a, b),
        AluOp::Sub => sub(a, b),
        _ => 0,
    }
}

/// `a + b`, wrapping.
#[inline(always)]
pub const fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping. The difference also feeds the signed comparator.
#[inline(always)]
pub const fn sub(a: u32, b: u32) -> u32 {
    a.wrapping_sub(b)
}
