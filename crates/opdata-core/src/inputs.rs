//! Operation input builders and validators
//!
//! An operation input is the op-data header followed by the operand section
//! for its [`OperationKind`]. Builders check every operand width against the
//! curve before anything is concatenated; validators recompute the expected
//! length from the embedded header so foreign buffers can be screened before
//! they reach the engine.

use crate::bytes::ByteBuffer;
use crate::errors::{HeaderError, InputError};
use crate::layout::Layout;
use crate::opdata::{parse_header, OpData};
use crate::params::CurveParameters;
use crate::types::OperationKind;

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// A (point, scalar) or (G1 point, G2 point) operand pair
pub type OperandPair = (ByteBuffer, ByteBuffer);

/// Caller-supplied operands. Points are full uncompressed encodings
/// (x then y, each coordinate `field_len × degree` bytes); scalars are
/// `order_len` bytes. All big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    Add {
        lhs: ByteBuffer,
        rhs: ByteBuffer,
    },
    Mul {
        point: ByteBuffer,
        scalar: ByteBuffer,
    },
    /// `count`, when given, must equal `pairs.len()`
    MultiExp {
        pairs: Vec<OperandPair>,
        count: Option<usize>,
    },
    /// `count`, when given, must equal `pairs.len()`
    Pairing {
        pairs: Vec<OperandPair>,
        count: Option<usize>,
    },
}

/// A complete buffer ready for dispatch to the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationInput {
    kind: OperationKind,
    layout: Layout,
    bytes: ByteBuffer,
}

impl OperationInput {
    /// Accept an externally supplied input after checking its declared lengths.
    pub fn from_bytes(kind: OperationKind, bytes: ByteBuffer) -> Result<Self, HeaderError> {
        let expected = expected_input_len(kind, &bytes)?;
        if expected != bytes.len() {
            return Err(HeaderError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let layout = parse_header(&bytes)?.layout;
        Ok(Self {
            kind,
            layout,
            bytes,
        })
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn as_buffer(&self) -> &ByteBuffer {
        &self.bytes
    }

    pub fn into_buffer(self) -> ByteBuffer {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The op-data header prefix
    pub fn opdata(&self) -> &[u8] {
        &self.bytes[..self.layout.header_len()]
    }

    /// Everything after the header
    pub fn operands(&self) -> &[u8] {
        &self.bytes[self.layout.header_len()..]
    }
}

/// Build the input for `kind` on the curve described by `params`.
pub fn build(
    kind: OperationKind,
    params: &CurveParameters,
    operands: &Operands,
) -> Result<OperationInput, InputError> {
    let layout = params.layout();
    if kind.needs_g2() && !layout.has_g2() {
        return Err(InputError::UnsupportedOperation {
            kind,
            family: params.family(),
            degree: layout.extension_degree,
        });
    }

    let section = match (kind.group(), operands) {
        (Some(group), Operands::Add { lhs, rhs })
            if matches!(kind, OperationKind::G1Add | OperationKind::G2Add) =>
        {
            let width = layout.point_len(group);
            check_width("lhs point", lhs, width)?;
            check_width("rhs point", rhs, width)?;
            lhs.concat(rhs)
        }
        (Some(group), Operands::Mul { point, scalar })
            if matches!(kind, OperationKind::G1Mul | OperationKind::G2Mul) =>
        {
            check_width("point", point, layout.point_len(group))?;
            check_width("scalar", scalar, layout.scalar_len())?;
            point.concat(scalar)
        }
        (Some(group), Operands::MultiExp { pairs, count }) if kind.has_pair_count() => {
            pair_section(
                kind,
                pairs,
                *count,
                ("point", layout.point_len(group)),
                ("scalar", layout.scalar_len()),
            )?
        }
        (None, Operands::Pairing { pairs, count }) => pair_section(
            kind,
            pairs,
            *count,
            ("G1 point", layout.g1_point_len()),
            ("G2 point", layout.g2_point_len()),
        )?,
        _ => return Err(InputError::OperandShape { kind }),
    };

    let opdata = OpData::encode(params)?;
    let bytes = opdata.as_buffer().concat(&section);
    debug_assert_eq!(
        Ok(bytes.len()),
        expected_input_len(kind, &bytes),
        "built input must validate"
    );
    crate::trace!(
        "built {} input: {} header + {} operand bytes",
        kind,
        opdata.len(),
        section.len()
    );

    Ok(OperationInput {
        kind,
        layout,
        bytes,
    })
}

pub fn g1_add(
    params: &CurveParameters,
    lhs: &ByteBuffer,
    rhs: &ByteBuffer,
) -> Result<OperationInput, InputError> {
    let operands = Operands::Add {
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    };
    build(OperationKind::G1Add, params, &operands)
}

pub fn g1_mul(
    params: &CurveParameters,
    point: &ByteBuffer,
    scalar: &ByteBuffer,
) -> Result<OperationInput, InputError> {
    let operands = Operands::Mul {
        point: point.clone(),
        scalar: scalar.clone(),
    };
    build(OperationKind::G1Mul, params, &operands)
}

/// Multi-exponentiation in G1 over `(point, scalar)` pairs
pub fn g1_multiexp(
    params: &CurveParameters,
    pairs: &[OperandPair],
    count: Option<usize>,
) -> Result<OperationInput, InputError> {
    let operands = Operands::MultiExp {
        pairs: pairs.to_vec(),
        count,
    };
    build(OperationKind::G1MultiExp, params, &operands)
}

pub fn g2_add(
    params: &CurveParameters,
    lhs: &ByteBuffer,
    rhs: &ByteBuffer,
) -> Result<OperationInput, InputError> {
    let operands = Operands::Add {
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    };
    build(OperationKind::G2Add, params, &operands)
}

pub fn g2_mul(
    params: &CurveParameters,
    point: &ByteBuffer,
    scalar: &ByteBuffer,
) -> Result<OperationInput, InputError> {
    let operands = Operands::Mul {
        point: point.clone(),
        scalar: scalar.clone(),
    };
    build(OperationKind::G2Mul, params, &operands)
}

/// Multi-exponentiation in G2 over `(point, scalar)` pairs
pub fn g2_multiexp(
    params: &CurveParameters,
    pairs: &[OperandPair],
    count: Option<usize>,
) -> Result<OperationInput, InputError> {
    let operands = Operands::MultiExp {
        pairs: pairs.to_vec(),
        count,
    };
    build(OperationKind::G2MultiExp, params, &operands)
}

/// Pairing check over `(G1 point, G2 point)` pairs
pub fn pairing(
    params: &CurveParameters,
    pairs: &[OperandPair],
    count: Option<usize>,
) -> Result<OperationInput, InputError> {
    let operands = Operands::Pairing {
        pairs: pairs.to_vec(),
        count,
    };
    build(OperationKind::Pairing, params, &operands)
}

/// Whether `bytes` has exactly the length its embedded header and pair count imply for `kind`.
pub fn input_length_valid(kind: OperationKind, bytes: &[u8]) -> bool {
    match expected_input_len(kind, bytes) {
        Ok(expected) => expected == bytes.len(),
        Err(err) => {
            crate::trace!("rejected {} input: {}", kind, err);
            false
        }
    }
}

/// Length an input for `kind` must have, recomputed from the header in `bytes`.
pub fn expected_input_len(kind: OperationKind, bytes: &[u8]) -> Result<usize, HeaderError> {
    let layout = parse_header(bytes)?.layout;
    if kind.needs_g2() && !layout.has_g2() {
        return Err(HeaderError::UnsupportedOperation {
            kind,
            degree: layout.extension_degree,
        });
    }

    let pairs = if kind.has_pair_count() {
        let offset = layout.header_len();
        let count = *bytes.get(offset).ok_or(HeaderError::Truncated {
            needed: offset + 1,
            actual: bytes.len(),
        })?;
        if count == 0 {
            return Err(HeaderError::ZeroPairs);
        }
        count as usize
    } else {
        0
    };

    Ok(layout.input_len(kind, pairs))
}

fn check_width(
    operand: &'static str,
    buf: &ByteBuffer,
    expected: usize,
) -> Result<(), InputError> {
    if buf.len() != expected {
        return Err(InputError::LengthMismatch {
            operand,
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// count || (first || second) × count
fn pair_section(
    kind: OperationKind,
    pairs: &[OperandPair],
    declared: Option<usize>,
    first: (&'static str, usize),
    second: (&'static str, usize),
) -> Result<ByteBuffer, InputError> {
    if let Some(declared) = declared {
        if declared != pairs.len() {
            return Err(InputError::CountMismatch {
                declared,
                supplied: pairs.len(),
            });
        }
    }
    if pairs.is_empty() {
        return Err(InputError::EmptyPairs { kind });
    }

    let count = ByteBuffer::from_uint8(pairs.len() as u64)?;
    let mut parts = vec![&count];
    for (a, b) in pairs {
        check_width(first.0, a, first.1)?;
        check_width(second.0, b, second.1)?;
        parts.push(a);
        parts.push(b);
    }
    Ok(ByteBuffer::concat_all(parts))
}
