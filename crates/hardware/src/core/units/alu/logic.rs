//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than (signed and unsigned).
//! Comparison results are always 0 or 1.
//!
//! The signed comparison is expressed the way the datapath computes it: when
//! the operand signs differ the negative operand is smaller; otherwise the
//! sign of `a - b` decides. Taking the difference as a parameter lets the
//! pipelined ALU reuse the subtractor output latched in Stage 1.

use crate::common::constants::SIGN_SHIFT;
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::arithmetic;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => set_less_than(a, b, arithmetic::sub(a, b)),
        AluOp::Sltu => set_less_than_unsigned(a, b),
        _ => 0,
    }
}

/// Signed less-than from the operand signs and a precomputed `a - b`.
#[inline(always)]
pub const fn set_less_than(a: u32, b: u32, diff: u32) -> u32 {
    let sign_a = a >> SIGN_SHIFT;
    let sign_b = b >> SIGN_SHIFT;
    if sign_a == sign_b {
        diff >> SIGN_SHIFT
    } else {
        sign_a
    }
}

/// Unsigned less-than.
#[inline(always)]
pub const fn set_less_than_unsigned(a: u32, b: u32) -> u32 {
    (a < b) as u32
}
