//! Error types for curve resolution and operand parsing

use curve_opdata_core::{BufferError, OperationKind, ParamsError, UnknownName};
use thiserror::Error;

/// Errors resolving a curve name or a configured curve entry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown curve '{0}' (see `curve-opdata curves`)")]
    UnknownCurve(String),

    #[error("Curve '{curve}': {source}")]
    UnknownTag {
        curve: String,
        #[source]
        source: UnknownName,
    },

    #[error("Curve '{curve}': invalid {field}: {source}")]
    InvalidValue {
        curve: String,
        field: &'static str,
        #[source]
        source: BufferError,
    },

    #[error("Curve '{curve}': {source}")]
    InvalidParameters {
        curve: String,
        #[source]
        source: ParamsError,
    },

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors turning command-line hex arguments into operands
#[derive(Error, Debug)]
pub enum OperandError {
    #[error("{kind} takes {expected} operands, got {actual}")]
    WrongCount {
        kind: OperationKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} operands come in pairs, got {actual} values")]
    Unpaired { kind: OperationKind, actual: usize },

    #[error("Operand {index}: {source}")]
    InvalidHex {
        index: usize,
        #[source]
        source: BufferError,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
