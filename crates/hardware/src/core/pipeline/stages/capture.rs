//! Stage 1 (capture) combinational logic.
//!
//! Reads the captured operands and computes, within the same cycle:
//! 1. **Fast results:** add, sub, and, or, xor. These paths are short and
//!    need no decomposition.
//! 2. **Partial shifts:** shift-amount bits 0–2 applied to both the left and
//!    the right shifter.
//! 3. **Fill:** the right-shift fill word, fixed here from A's sign bit and
//!    the operation code.

use crate::core::pipeline::latches::{CaptureEntry, CompleteEntry};
use crate::core::units::alu::{arithmetic, shifts};

/// Computes the Stage 1 → Stage 2 record for the captured operands.
pub fn evaluate(entry: &CaptureEntry) -> CompleteEntry {
    let CaptureEntry { valid, op, a, b } = *entry;
    let shamt = shifts::shift_amount(b);
    let fill = shifts::right_fill(op, a);

    CompleteEntry {
        valid,
        op,
        a,
        b,
        sum: arithmetic::add(a, b),
        diff: arithmetic::sub(a, b),
        and: a & b,
        or: a | b,
        xor: a ^ b,
        sll_partial: shifts::shift_left_low(a, shamt),
        srl_partial: shifts::shift_right_low(a, shamt, fill),
        fill,
    }
}
