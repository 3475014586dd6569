//! Error types for the op-data codec

use crate::types::{CurveFamily, OperationKind, TwistType};
use thiserror::Error;

extern crate alloc;
use alloc::string::{String, ToString};

/// Top-level codec error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("Malformed header: {0}")]
    Header(#[from] HeaderError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Byte buffer errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BufferError {
    #[error("Overflow: {bits}-bit value does not fit in {width} byte(s)")]
    Overflow { bits: u64, width: usize },

    #[error("Out of range: {length} byte(s) at offset {offset} of a {available}-byte buffer")]
    OutOfRange {
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Curve parameter validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("Modulus must be greater than one")]
    ModulusTooSmall,

    #[error("Modulus is {0} bytes wide (max 255)")]
    ModulusTooWide(usize),

    #[error("Group order must be non-zero")]
    ZeroOrder,

    #[error("Group order is {0} bytes wide (max 255)")]
    OrderTooWide(usize),

    #[error("Unsupported extension degree {0}")]
    UnsupportedDegree(u8),

    #[error("Twist {twist} does not fit extension degree {degree}")]
    TwistMismatch { twist: TwistType, degree: u8 },

    #[error("G2 generator has {actual} coordinates, expected {expected}")]
    G2Shape { expected: usize, actual: usize },

    #[error("{0} is not an element of the base field")]
    CoordinateOutOfField(&'static str),
}

/// Op-data header parsing errors.
///
/// Headers may come from untrusted buffers, so the public predicates collapse
/// these into `false`; the reason is kept for tooling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("Truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("Length mismatch: header declares {expected} bytes, buffer has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Unknown curve family tag 0x{0:02x}")]
    UnknownFamily(u8),

    #[error("Unknown twist tag 0x{0:02x}")]
    UnknownTwist(u8),

    #[error("Zero-length {0}")]
    ZeroLength(&'static str),

    #[error("{0} has a leading zero byte")]
    NonCanonical(&'static str),

    #[error("Modulus must be greater than one")]
    ModulusTooSmall,

    #[error("Unsupported extension degree {0}")]
    UnsupportedDegree(u8),

    #[error("Twist {twist} does not fit extension degree {degree}")]
    TwistMismatch { twist: TwistType, degree: u8 },

    #[error("{0} is not an element of the base field")]
    CoordinateOutOfField(&'static str),

    #[error("{kind} is not available on a degree-{degree} curve")]
    UnsupportedOperation { kind: OperationKind, degree: u8 },

    #[error("Pair count of zero")]
    ZeroPairs,
}

/// Operation input construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Length mismatch for {operand}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Count mismatch: declared {declared} pair(s), supplied {supplied}")]
    CountMismatch { declared: usize, supplied: usize },

    #[error("{kind} needs at least one pair")]
    EmptyPairs { kind: OperationKind },

    #[error("{kind} is not available for {family} curves of degree {degree}")]
    UnsupportedOperation {
        kind: OperationKind,
        family: CurveFamily,
        degree: u8,
    },

    #[error("Operands do not match the shape of {kind}")]
    OperandShape { kind: OperationKind },

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Unrecognised textual name for a tag or operation kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {what} '{name}'")]
pub struct UnknownName {
    pub what: &'static str,
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(what: &'static str, name: &str) -> Self {
        Self {
            what,
            name: name.to_string(),
        }
    }
}
