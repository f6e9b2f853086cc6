//! Stage 2 (complete) combinational logic.
//!
//! Finishes both partial shifts with shift-amount bits 3–4 and selects the
//! final result by operation code. Arithmetic and bitwise results come
//! straight from Stage 1; the signed comparator reuses Stage 1's difference.

use crate::core::pipeline::latches::{AluOutputs, CompleteEntry};
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::{logic, shifts};

/// Computes the value the output register loads on the next edge.
pub fn evaluate(entry: &CompleteEntry) -> AluOutputs {
    let shamt = shifts::shift_amount(entry.b);

    let result = match entry.op {
        AluOp::Add => entry.sum,
        AluOp::Sub => entry.diff,
        AluOp::And => entry.and,
        AluOp::Or => entry.or,
        AluOp::Xor => entry.xor,
        AluOp::Sll => shifts::shift_left_high(entry.sll_partial, shamt),
        // SRL and SRA share the right shifter; `fill` already tells them apart.
        AluOp::Srl | AluOp::Sra => shifts::shift_right_high(entry.srl_partial, shamt, entry.fill),
        AluOp::Slt => logic::set_less_than(entry.a, entry.b, entry.diff),
        AluOp::Sltu => logic::set_less_than_unsigned(entry.a, entry.b),
        AluOp::PassA => entry.a,
    };

    AluOutputs {
        result,
        valid: entry.valid,
    }
}
