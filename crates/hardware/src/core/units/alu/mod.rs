//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational integer ALU shared by both clocked
//! variants. It handles 32-bit arithmetic, logical operations, shifts, and
//! comparisons.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra (full and split barrel shifter)

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// A pure, total function over its inputs: every operand pair and every
/// operation code, including the passthrough default, yields a defined result.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (its low 5 bits are the shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvalu_core::core::units::alu::Alu;
    /// use rvalu_core::core::pipeline::signals::AluOp;
    ///
    /// // Addition wraps at 32 bits
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    ///
    /// // Arithmetic shift replicates the sign bit
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 31), 0xFFFF_FFFF);
    ///
    /// // Signed comparison: -1 < 1
    /// assert_eq!(Alu::execute(AluOp::Slt, 0xFFFF_FFFF, 1), 1);
    ///
    /// // Undefined codes pass operand A through
    /// assert_eq!(Alu::execute(AluOp::PassA, 0x1234, 0x5678), 0x1234);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),

            AluOp::PassA => a,
        }
    }
}
