//! Lockstep Checker Tests.

use proptest::prelude::*;
use rvalu_core::common::error::SimError;
use rvalu_core::core::pipeline::latches::{AluInputs, AluOutputs};
use rvalu_core::core::pipeline::signals::AluOp;
use rvalu_core::sim::lockstep::{self, Lockstep, LockstepReport};
use rvalu_core::sim::{Stimulus, StimulusStep};

use crate::common::builder::StimulusBuilder;
use crate::common::harness::init_tracing;

#[test]
fn report_counts_drained_edges() {
    init_tracing();
    let stimulus = StimulusBuilder::new()
        .op(AluOp::Add, 1, 2)
        .op(AluOp::Sra, 0x8000_0000, 31)
        .op(AluOp::Sltu, 0xFFFF_FFFF, 1)
        .build();

    let report = lockstep::check(&stimulus).unwrap();
    assert_eq!(
        report,
        LockstepReport {
            cycles: 5,
            compared: 5,
            valid_compared: 3,
        }
    );
}

#[test]
fn reset_mid_stream_stays_in_lockstep() {
    let stimulus = StimulusBuilder::new()
        .op(AluOp::Sub, 9, 3)
        .op(AluOp::Sll, 3, 9)
        .reset_with(AluInputs::new(AluOp::Xor, 0xFF, 0xF0))
        .op(AluOp::Slt, 0x8000_0000, 1)
        .bubble()
        .op(AluOp::PassA, 42, 0)
        .build();

    let report = lockstep::check(&stimulus).unwrap();
    assert_eq!(report.cycles, 8);
    assert_eq!(report.valid_compared, 2);
}

#[test]
fn step_returns_pipelined_output() {
    let mut ls = Lockstep::new();
    let _ = ls.step(false, AluInputs::new(AluOp::Xor, 6, 3)).unwrap();
    let _ = ls.step(false, AluInputs::bubble()).unwrap();
    let out = ls.step(false, AluInputs::bubble()).unwrap();
    assert_eq!(out, AluOutputs::new(5, true));
    assert_eq!(ls.report().compared, 3);
}

#[test]
fn mismatch_error_names_cycle_and_values() {
    let err = SimError::Mismatch {
        cycle: 17,
        expected: AluOutputs::new(0xFFFF_FFFF, true),
        actual: AluOutputs::new(0x0000_0001, true),
    };
    let msg = err.to_string();
    assert!(msg.contains("cycle 17"), "{msg}");
    assert!(msg.contains("0xffffffff"), "{msg}");
    assert!(msg.contains("0x00000001"), "{msg}");
}

fn step() -> impl Strategy<Value = StimulusStep> {
    (
        prop::bool::weighted(0.05),
        any::<bool>(),
        0u8..16,
        any::<u32>(),
        any::<u32>(),
    )
        .prop_map(|(reset, valid, code, a, b)| StimulusStep {
            reset,
            inputs: AluInputs {
                valid,
                op: AluOp::from_bits(code),
                a,
                b,
            },
        })
}

proptest! {
    #[test]
    fn random_traces_with_resets_never_diverge(
        steps in prop::collection::vec(step(), 0..128)
    ) {
        let stimulus = Stimulus::new(steps);
        let report = lockstep::check(&stimulus);
        prop_assert!(report.is_ok(), "{:?}", report);
        let report = report.unwrap();
        prop_assert_eq!(report.cycles, stimulus.len() as u64 + 2);
    }
}
