//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) on 32-bit operands. Only the low 5 bits of
//! `b` form the shift amount (0–31); the remaining bits are ignored.
//!
//! Besides the one-step barrel shift used by the single-cycle ALU, this module
//! exposes the barrel shifter split into two halves for the pipelined ALU:
//! 1. **Low half:** shift-amount bits 0, 1, 2 (by 1, 2, 4 positions).
//! 2. **High half:** shift-amount bits 3, 4 (by 8, 16 positions).
//!
//! Right shifts fill vacated bits from a `fill` word that is either all zeros
//! (logical) or all ones (arithmetic with a negative operand). The fill is
//! decided once from the original operand and handed to both halves.

use crate::common::constants::{SHAMT_MASK, SIGN_SHIFT, XLEN};
use crate::core::pipeline::signals::AluOp;

/// Executes a shift operation as a single barrel shift.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = shift_amount(b);
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}

/// Extracts the 5-bit shift amount from operand B.
#[inline(always)]
pub const fn shift_amount(b: u32) -> u32 {
    b & SHAMT_MASK
}

/// Fill word for a right shift: all ones for SRA of a negative operand, zero otherwise.
#[inline(always)]
pub const fn right_fill(op: AluOp, a: u32) -> u32 {
    if matches!(op, AluOp::Sra) && (a >> SIGN_SHIFT) != 0 {
        u32::MAX
    } else {
        0
    }
}

/// Applies shift-amount bits 0–2 to a left shift, zero-filled.
pub const fn shift_left_low(a: u32, shamt: u32) -> u32 {
    let v = left_step(a, shamt, 0);
    let v = left_step(v, shamt, 1);
    left_step(v, shamt, 2)
}

/// Applies shift-amount bits 3–4 to a partially left-shifted value.
pub const fn shift_left_high(partial: u32, shamt: u32) -> u32 {
    let v = left_step(partial, shamt, 3);
    left_step(v, shamt, 4)
}

/// Applies shift-amount bits 0–2 to a right shift, filling from `fill`.
pub const fn shift_right_low(a: u32, shamt: u32, fill: u32) -> u32 {
    let v = right_step(a, shamt, 0, fill);
    let v = right_step(v, shamt, 1, fill);
    right_step(v, shamt, 2, fill)
}

/// Applies shift-amount bits 3–4 to a partially right-shifted value, filling from `fill`.
pub const fn shift_right_high(partial: u32, shamt: u32, fill: u32) -> u32 {
    let v = right_step(partial, shamt, 3, fill);
    right_step(v, shamt, 4, fill)
}

/// One mux level: shifts by `1 << bit` when that bit of `shamt` is set.
#[inline(always)]
const fn left_step(v: u32, shamt: u32, bit: u32) -> u32 {
    if shamt & (1 << bit) != 0 {
        v << (1 << bit)
    } else {
        v
    }
}

// The largest level shifts by 16, so `XLEN - dist` never reaches the word width.
#[inline(always)]
const fn right_step(v: u32, shamt: u32, bit: u32, fill: u32) -> u32 {
    let dist = 1 << bit;
    if shamt & dist != 0 {
        (v >> dist) | (fill << (XLEN - dist))
    } else {
        v
    }
}
