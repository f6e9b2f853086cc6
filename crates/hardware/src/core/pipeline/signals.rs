//! ALU operation codes.
//!
//! This module defines the operation-code contract shared with the instruction decoder:
//! 1. **Operation Set:** A closed enum of the ten integer operations plus the passthrough default.
//! 2. **Encoding:** The 4-bit code carried on the operation port, decoded totally.
//! 3. **Mnemonics:** Lowercase names used by stimulus traces and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Width mask of the operation-code port (4 bits).
pub const OP_CODE_MASK: u8 = 0xF;

/// Integer ALU operation selected for one evaluation.
///
/// Every 4-bit code maps to exactly one variant; codes outside the defined
/// set decode to [`AluOp::PassA`] instead of being rejected, since the
/// hardware boundary has no error channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AluOp {
    /// Integer addition (code `0x0`). Also the reset value of every op register.
    #[default]
    Add,

    /// Integer subtraction (code `0x1`).
    Sub,

    /// Bitwise AND (code `0x2`).
    And,

    /// Bitwise OR (code `0x3`).
    Or,

    /// Bitwise XOR (code `0x4`).
    Xor,

    /// Shift left logical (code `0x5`).
    Sll,

    /// Shift right logical (code `0x6`).
    Srl,

    /// Shift right arithmetic (code `0x7`).
    Sra,

    /// Set less than, signed (code `0x8`).
    Slt,

    /// Set less than, unsigned (code `0x9`).
    Sltu,

    /// Any undefined code (`0xA..=0xF`): operand A passes through unchanged.
    #[serde(rename = "pass")]
    PassA,
}

impl AluOp {
    /// Every operation, in encoding order.
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::Slt,
        Self::Sltu,
        Self::PassA,
    ];

    /// Decodes the value on the 4-bit operation port.
    ///
    /// Bits above bit 3 do not exist on the port and are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvalu_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(AluOp::from_bits(0x7), AluOp::Sra);
    /// assert_eq!(AluOp::from_bits(0xC), AluOp::PassA);
    /// assert_eq!(AluOp::from_bits(0x11), AluOp::Sub);
    /// ```
    pub const fn from_bits(code: u8) -> Self {
        match code & OP_CODE_MASK {
            0x0 => Self::Add,
            0x1 => Self::Sub,
            0x2 => Self::And,
            0x3 => Self::Or,
            0x4 => Self::Xor,
            0x5 => Self::Sll,
            0x6 => Self::Srl,
            0x7 => Self::Sra,
            0x8 => Self::Slt,
            0x9 => Self::Sltu,
            _ => Self::PassA,
        }
    }

    /// Returns the canonical 4-bit code. [`AluOp::PassA`] encodes as `0xF`.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Add => 0x0,
            Self::Sub => 0x1,
            Self::And => 0x2,
            Self::Or => 0x3,
            Self::Xor => 0x4,
            Self::Sll => 0x5,
            Self::Srl => 0x6,
            Self::Sra => 0x7,
            Self::Slt => 0x8,
            Self::Sltu => 0x9,
            Self::PassA => 0xF,
        }
    }

    /// Position of this operation in [`AluOp::ALL`]; used to index counters.
    pub const fn index(self) -> usize {
        match self {
            Self::PassA => 10,
            op => op.bits() as usize,
        }
    }

    /// Lowercase mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::PassA => "pass",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when a mnemonic names no ALU operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown ALU mnemonic `{0}`")]
pub struct UnknownMnemonic(pub String);

impl FromStr for AluOp {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMnemonic(s.to_owned()))
    }
}
