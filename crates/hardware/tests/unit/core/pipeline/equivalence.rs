//! Single-Cycle / Pipelined Equivalence Tests.
//!
//! For any input sequence, the pipelined ALU's output on edge N+1 equals the
//! single-cycle ALU's output on edge N. This is what makes the split barrel
//! shifter safe to deploy.

use proptest::prelude::*;
use rvalu_core::core::pipeline::backend::{PipelinedAlu, SingleCycleAlu};
use rvalu_core::core::pipeline::latches::{AluInputs, AluOutputs};
use rvalu_core::core::pipeline::signals::AluOp;
use rvalu_core::core::units::alu::Alu;

use crate::common::harness::{clock, clock_drained, init_tracing};

/// Operands biased towards the values where shifters and comparators break.
fn operand() -> impl Strategy<Value = u32> {
    prop_oneof![
        any::<u32>(),
        Just(0),
        Just(1),
        Just(0x1F),
        Just(0x20),
        Just(0x7FFF_FFFF),
        Just(0x8000_0000),
        Just(0xFFFF_FFFF),
    ]
}

fn request() -> impl Strategy<Value = AluInputs> {
    let fields = (any::<bool>(), 0u8..16, operand(), operand());
    fields.prop_map(|(valid, code, a, b)| AluInputs {
        valid,
        op: AluOp::from_bits(code),
        a,
        b,
    })
}

/// Runs both variants and checks the one-edge skew.
fn assert_skewed_equal(inputs: &[AluInputs]) -> Result<(), TestCaseError> {
    let mut single = SingleCycleAlu::new();
    let mut piped = PipelinedAlu::new();
    let mut padded = inputs.to_vec();
    padded.push(AluInputs::bubble());

    let s = clock(&mut single, &padded);
    let p = clock(&mut piped, &padded);

    prop_assert_eq!(p[0], AluOutputs::default());
    for i in 0..s.len() - 1 {
        prop_assert_eq!(s[i], p[i + 1], "edge {}", i);
    }
    Ok(())
}

#[test]
fn every_op_at_every_shift_boundary() {
    init_tracing();
    let amounts: Vec<u32> = (0..=32).chain([u32::MAX - 31, u32::MAX]).collect();
    let mut inputs = Vec::new();
    for code in 0u8..16 {
        for &a in &[0, 1, 0x7FFF_FFFF, 0x8000_0000, 0xFFFF_FFFF, 0xDEAD_BEEF] {
            for &b in &amounts {
                inputs.push(AluInputs::new(AluOp::from_bits(code), a, b));
            }
        }
    }

    let mut single = SingleCycleAlu::new();
    let mut piped = PipelinedAlu::new();
    let s = clock_drained(&mut single, &inputs);
    let p = clock_drained(&mut piped, &inputs);

    for (i, req) in inputs.iter().enumerate() {
        let expected = Alu::execute(req.op, req.a, req.b);
        assert_eq!(s[i + 1].result, expected, "single-cycle {req:?}");
        assert_eq!(p[i + 2].result, expected, "pipelined {req:?}");
    }
}

#[test]
fn reference_vectors_through_both_pipelines() {
    let cases = [
        (AluOp::Sra, 0x8000_0000, 31, 0xFFFF_FFFF),
        (AluOp::Srl, 0x8000_0000, 31, 0x0000_0001),
        (AluOp::Slt, 0xFFFF_FFFF, 1, 1),
        (AluOp::Sltu, 0xFFFF_FFFF, 1, 0),
        (AluOp::Add, 0xFFFF_FFFF, 1, 0),
        (AluOp::from_bits(0xB), 0x1357_9BDF, 0x2468_ACE0, 0x1357_9BDF),
    ];
    let inputs: Vec<_> = cases
        .iter()
        .map(|&(op, a, b, _)| AluInputs::new(op, a, b))
        .collect();

    let p = clock_drained(&mut PipelinedAlu::new(), &inputs);
    let s = clock_drained(&mut SingleCycleAlu::new(), &inputs);
    for (i, &(op, _, _, expected)) in cases.iter().enumerate() {
        assert_eq!(p[i + 2], AluOutputs::new(expected, true), "{op}");
        assert_eq!(s[i + 1], AluOutputs::new(expected, true), "{op}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn pipelined_matches_single_cycle_one_edge_later(
        inputs in prop::collection::vec(request(), 1..64)
    ) {
        assert_skewed_equal(&inputs)?;
    }

    #[test]
    fn pipelined_result_matches_combinational_alu(
        code in 0u8..16,
        a in any::<u32>(),
        b in any::<u32>(),
    ) {
        let op = AluOp::from_bits(code);
        let outs = clock_drained(&mut PipelinedAlu::new(), &[AluInputs::new(op, a, b)]);
        prop_assert_eq!(outs[2], AluOutputs::new(Alu::execute(op, a, b), true));
    }

    #[test]
    fn pipelined_shifts_ignore_upper_bits_of_b(
        a in any::<u32>(),
        b in any::<u32>(),
        upper in any::<u32>(),
    ) {
        let toggled = b ^ (upper & !0x1F);
        for op in [AluOp::Sll, AluOp::Srl, AluOp::Sra] {
            let x = clock_drained(&mut PipelinedAlu::new(), &[AluInputs::new(op, a, b)]);
            let y = clock_drained(&mut PipelinedAlu::new(), &[AluInputs::new(op, a, toggled)]);
            prop_assert_eq!(x[2], y[2]);
        }
    }
}
