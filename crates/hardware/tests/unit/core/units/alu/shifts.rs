//! ALU Shift Operation Tests.
//!
//! Deterministic edge-case tests for the 32-bit shifts:
//!   SLL: Shift Left Logical
//!   SRL: Shift Right Logical
//!   SRA: Shift Right Arithmetic
//!
//! Covers boundary shift amounts (0, 1, 31), masking of operand B to its low
//! 5 bits, sign extension for SRA, and the two halves of the split barrel
//! shifter recombining into the full shift.

use proptest::prelude::*;
use rvalu_core::core::pipeline::signals::AluOp;
use rvalu_core::core::units::alu::{Alu, shifts};

// ─── Constants ───────────────────────────────────────────────────────────────

const ONE: u32 = 1;
const NEG1: u32 = u32::MAX;
const I32_MIN: u32 = i32::MIN as u32; // 0x8000_0000
const I32_MAX: u32 = i32::MAX as u32; // 0x7FFF_FFFF

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b)
}

// ═════════════════════════════════════════════════════════════════════════════
//  SLL
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sll_shift_by_zero() {
    assert_eq!(alu(AluOp::Sll, 0xDEAD_BEEF, 0), 0xDEAD_BEEF);
}

#[test]
fn sll_shift_by_31() {
    assert_eq!(alu(AluOp::Sll, ONE, 31), I32_MIN);
    assert_eq!(alu(AluOp::Sll, NEG1, 31), I32_MIN);
}

#[test]
fn sll_zero_fills() {
    assert_eq!(alu(AluOp::Sll, NEG1, 4), 0xFFFF_FFF0);
}

/// Only the low 5 bits of B are used: 32 → 0, 33 → 1.
#[test]
fn sll_shift_amount_masked_to_5_bits() {
    assert_eq!(alu(AluOp::Sll, 42, 32), 42);
    assert_eq!(alu(AluOp::Sll, 42, 33), 84);
    assert_eq!(alu(AluOp::Sll, ONE, 0xFFFF_FFE1), 2);
}

#[test]
fn sll_power_of_two_generation() {
    for i in 0..32 {
        assert_eq!(alu(AluOp::Sll, ONE, i), 1u32 << i, "SLL failed: 1 << {i}");
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  SRL
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn srl_sign_bit_to_lsb() {
    assert_eq!(alu(AluOp::Srl, 0x8000_0000, 31), 0x0000_0001);
}

#[test]
fn srl_zero_fills() {
    assert_eq!(alu(AluOp::Srl, NEG1, 4), 0x0FFF_FFFF);
}

#[test]
fn srl_shift_by_zero() {
    assert_eq!(alu(AluOp::Srl, 0x8765_4321, 0), 0x8765_4321);
}

#[test]
fn srl_upper_bits_of_b_ignored() {
    assert_eq!(alu(AluOp::Srl, 0x8000_0000, 0xFFFF_FFFF), 1);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SRA
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sra_sign_extends_to_all_ones() {
    assert_eq!(alu(AluOp::Sra, 0x8000_0000, 31), 0xFFFF_FFFF);
}

#[test]
fn sra_negative_partial() {
    assert_eq!(alu(AluOp::Sra, I32_MIN, 4), 0xF800_0000);
    assert_eq!(alu(AluOp::Sra, 0xF000_0000, 28), NEG1);
}

#[test]
fn sra_positive_behaves_like_srl() {
    assert_eq!(alu(AluOp::Sra, I32_MAX, 31), 0);
    assert_eq!(alu(AluOp::Sra, 0x4000_0000, 30), 1);
}

#[test]
fn sra_minus_one_is_fixed_point() {
    for i in 0..32 {
        assert_eq!(alu(AluOp::Sra, NEG1, i), NEG1, "SRA -1 by {i}");
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Split barrel shifter
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn right_fill_only_for_negative_sra() {
    assert_eq!(shifts::right_fill(AluOp::Sra, I32_MIN), NEG1);
    assert_eq!(shifts::right_fill(AluOp::Sra, I32_MAX), 0);
    assert_eq!(shifts::right_fill(AluOp::Srl, I32_MIN), 0);
    assert_eq!(shifts::right_fill(AluOp::Add, I32_MIN), 0);
}

#[test]
fn left_low_half_applies_bits_0_to_2() {
    assert_eq!(shifts::shift_left_low(ONE, 0b00111), 0x80);
    assert_eq!(shifts::shift_left_low(ONE, 0b11000), ONE);
    assert_eq!(shifts::shift_left_low(ONE, 0b00101), 1 << 5);
}

#[test]
fn left_high_half_applies_bits_3_and_4() {
    assert_eq!(shifts::shift_left_high(0x80, 0b00111), 0x80);
    assert_eq!(shifts::shift_left_high(ONE, 0b11000), 1 << 24);
    assert_eq!(shifts::shift_left_high(ONE, 0b01000), 1 << 8);
}

#[test]
fn right_halves_carry_sign_fill() {
    let low = shifts::shift_right_low(I32_MIN, 0b11111, NEG1);
    assert_eq!(low, 0xFF00_0000);
    assert_eq!(shifts::shift_right_high(low, 0b11111, NEG1), NEG1);

    let low = shifts::shift_right_low(I32_MIN, 0b11111, 0);
    assert_eq!(low, 0x0100_0000);
    assert_eq!(shifts::shift_right_high(low, 0b11111, 0), ONE);
}

proptest! {
    #[test]
    fn split_left_shift_matches_full(a in any::<u32>(), b in any::<u32>()) {
        let shamt = shifts::shift_amount(b);
        let split = shifts::shift_left_high(shifts::shift_left_low(a, shamt), shamt);
        prop_assert_eq!(split, alu(AluOp::Sll, a, b));
    }

    #[test]
    fn split_right_shift_matches_full(
        a in any::<u32>(),
        b in any::<u32>(),
        arith in any::<bool>(),
    ) {
        let op = if arith { AluOp::Sra } else { AluOp::Srl };
        let shamt = shifts::shift_amount(b);
        let fill = shifts::right_fill(op, a);
        let partial = shifts::shift_right_low(a, shamt, fill);
        let split = shifts::shift_right_high(partial, shamt, fill);
        prop_assert_eq!(split, alu(op, a, b));
    }

    #[test]
    fn shifts_ignore_upper_27_bits_of_b(
        a in any::<u32>(),
        b in any::<u32>(),
        upper in any::<u32>(),
    ) {
        let toggled = b ^ (upper & !0x1F);
        for op in [AluOp::Sll, AluOp::Srl, AluOp::Sra] {
            prop_assert_eq!(alu(op, a, b), alu(op, a, toggled));
        }
    }
}
