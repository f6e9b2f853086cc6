//! Stimulus traces.
//!
//! A stimulus is the per-cycle sequence of port values driven into an ALU.
//! Traces are written as a JSON array; each element is one clock edge:
//!
//! ```json
//! [
//!   { "reset": true },
//!   { "op": "add", "a": 4294967295, "b": 1 },
//!   { "op": 7, "a": 2147483648, "b": 31 },
//!   { "valid": false, "op": "sll", "a": 1, "b": 4 }
//! ]
//! ```
//!
//! `reset` defaults to `false`, `valid` to `true`, `op` to `add`, and both
//! operands to zero. `op` accepts a mnemonic or a numeric code; a number that
//! does not fit the 4-bit port is rejected, while any 4-bit code outside the
//! defined set decodes to the passthrough operation as the hardware would.

use std::path::Path;

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};
use crate::core::pipeline::latches::AluInputs;
use crate::core::pipeline::signals::{AluOp, OP_CODE_MASK};

/// One clock edge of stimulus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StimulusStep {
    /// Synchronous reset asserted on this edge.
    pub reset: bool,
    /// Values on the input ports.
    pub inputs: AluInputs,
}

impl StimulusStep {
    /// An edge that presents `inputs` without reset.
    pub const fn drive(inputs: AluInputs) -> Self {
        Self {
            reset: false,
            inputs,
        }
    }

    /// An edge with reset asserted.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            inputs: AluInputs::bubble(),
        }
    }
}

/// Operation field as written in a trace.
#[derive(Deserialize)]
#[serde(untagged)]
enum OpField {
    Code(u64),
    Mnemonic(String),
}

impl TryFrom<OpField> for AluOp {
    type Error = SimError;

    fn try_from(field: OpField) -> Result<Self, Self::Error> {
        match field {
            OpField::Code(code) if code > u64::from(OP_CODE_MASK) => {
                Err(SimError::InvalidOpCode(code))
            }
            OpField::Code(code) => Ok(Self::from_bits(code as u8)),
            OpField::Mnemonic(name) => Ok(name.parse()?),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    #[serde(default)]
    reset: bool,
    #[serde(default = "RawStep::default_valid")]
    valid: bool,
    #[serde(default)]
    op: Option<OpField>,
    #[serde(default)]
    a: u32,
    #[serde(default)]
    b: u32,
}

impl RawStep {
    const fn default_valid() -> bool {
        true
    }
}

impl TryFrom<RawStep> for StimulusStep {
    type Error = SimError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let op = raw.op.map_or(Ok(AluOp::Add), AluOp::try_from)?;
        Ok(Self {
            reset: raw.reset,
            inputs: AluInputs {
                valid: raw.valid,
                op,
                a: raw.a,
                b: raw.b,
            },
        })
    }
}

/// A per-cycle input sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stimulus {
    steps: Vec<StimulusStep>,
}

impl Stimulus {
    /// Wraps an explicit list of edges.
    pub const fn new(steps: Vec<StimulusStep>) -> Self {
        Self { steps }
    }

    /// Parses a JSON trace.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] for malformed JSON, [`SimError::InvalidOpCode`]
    /// for a numeric code above `0xF`, or [`SimError::UnknownMnemonic`] for an
    /// unrecognised operation name.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let raw: Vec<RawStep> = serde_json::from_str(json)?;
        let steps = raw
            .into_iter()
            .map(StimulusStep::try_from)
            .collect::<SimResult<Vec<_>>>()?;
        Ok(Self { steps })
    }

    /// Reads and parses a JSON trace file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise as
    /// [`Stimulus::from_json`].
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The edges of this trace.
    pub fn steps(&self) -> &[StimulusStep] {
        &self.steps
    }

    /// Number of edges.
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` for an empty trace.
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The trace followed by `latency` bubbles, so every request reaches the output.
    pub fn drained(&self, latency: usize) -> impl Iterator<Item = StimulusStep> + '_ {
        let bubble = StimulusStep::drive(AluInputs::bubble());
        self.steps
            .iter()
            .copied()
            .chain(std::iter::repeat_n(bubble, latency))
    }
}

impl FromIterator<AluInputs> for Stimulus {
    fn from_iter<I: IntoIterator<Item = AluInputs>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().map(StimulusStep::drive).collect(),
        }
    }
}

impl FromIterator<StimulusStep> for Stimulus {
    fn from_iter<I: IntoIterator<Item = StimulusStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
