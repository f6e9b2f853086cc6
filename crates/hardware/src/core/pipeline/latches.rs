//! Pipeline latch structures for the ALU's clocked variants.
//!
//! This module defines the records held in the ALU's registers:
//! 1. **Port Values:** [`AluInputs`] presented each cycle and the [`AluOutputs`] register.
//! 2. **Stage 1 Register:** [`CaptureEntry`], the operands as sampled on the clock edge.
//! 3. **Stage 1 → Stage 2 Register:** [`CompleteEntry`], the operands plus the
//!    fast results and half-finished shifts computed in Stage 1.
//!
//! Every record's `Default` is its reset value: all zero, invalid.

use crate::core::pipeline::signals::AluOp;
use crate::core::pipeline::traits::PipelineLatch;

/// Values on the ALU input ports for one cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AluInputs {
    /// Marks a genuine request; `false` is a pipeline bubble.
    pub valid: bool,
    /// Operation code.
    pub op: AluOp,
    /// Operand A.
    pub a: u32,
    /// Operand B.
    pub b: u32,
}

impl AluInputs {
    /// A valid request.
    pub const fn new(op: AluOp, a: u32, b: u32) -> Self {
        Self {
            valid: true,
            op,
            a,
            b,
        }
    }

    /// An explicit bubble: invalid, all operands zero.
    pub const fn bubble() -> Self {
        Self {
            valid: false,
            op: AluOp::Add,
            a: 0,
            b: 0,
        }
    }

    /// Same operands, marked invalid.
    #[must_use]
    pub const fn invalidated(self) -> Self {
        Self {
            valid: false,
            ..self
        }
    }
}

/// The ALU output register.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AluOutputs {
    /// 32-bit result.
    pub result: u32,
    /// Whether `result` belongs to a genuine request.
    pub valid: bool,
}

impl AluOutputs {
    /// An output register holding `result` with the given valid flag.
    pub const fn new(result: u32, valid: bool) -> Self {
        Self { result, valid }
    }
}

/// Stage 1 input register: operands captured on the clock edge.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CaptureEntry {
    /// Captured input-valid flag.
    pub valid: bool,
    /// Captured operation code.
    pub op: AluOp,
    /// Captured operand A.
    pub a: u32,
    /// Captured operand B.
    pub b: u32,
}

impl From<AluInputs> for CaptureEntry {
    fn from(inputs: AluInputs) -> Self {
        Self {
            valid: inputs.valid,
            op: inputs.op,
            a: inputs.a,
            b: inputs.b,
        }
    }
}

/// Stage 1 → Stage 2 register.
///
/// Carries the captured operands together with everything Stage 1 computed:
/// the short-path results and both partial shifts. `fill` is fixed here
/// because Stage 2 must keep extending with the sign of the original A.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CompleteEntry {
    /// Valid flag propagated from Stage 1.
    pub valid: bool,
    /// Operation code propagated from Stage 1.
    pub op: AluOp,
    /// Operand A, for the comparators and the passthrough default.
    pub a: u32,
    /// Operand B, for the comparators and shift-amount bits 3–4.
    pub b: u32,
    /// `a + b`.
    pub sum: u32,
    /// `a - b`.
    pub diff: u32,
    /// `a & b`.
    pub and: u32,
    /// `a | b`.
    pub or: u32,
    /// `a ^ b`.
    pub xor: u32,
    /// Left shift after shift-amount bits 0–2.
    pub sll_partial: u32,
    /// Right shift after shift-amount bits 0–2.
    pub srl_partial: u32,
    /// Right-shift fill word: all ones for SRA of a negative A, else zero.
    pub fill: u32,
}

impl PipelineLatch for CaptureEntry {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_bubble(&self) -> bool {
        !self.valid
    }
}

impl PipelineLatch for CompleteEntry {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_bubble(&self) -> bool {
        !self.valid
    }
}

impl PipelineLatch for AluOutputs {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_bubble(&self) -> bool {
        !self.valid
    }
}
