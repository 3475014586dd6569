//! Hex command-line operands to [`Operands`]

use crate::error::OperandError;
use curve_opdata_core::{ByteBuffer, OperandPair, Operands, OperationKind};

/// Parse hex operands for `kind`.
///
/// Add and mul take exactly two values. Multiexp and pairing take an even
/// number, read as consecutive pairs; `count` is the caller's declared pair
/// count and is checked against the pairs when the input is built.
pub fn parse_operands(
    kind: OperationKind,
    values: &[String],
    count: Option<usize>,
) -> Result<Operands, OperandError> {
    let buffers = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            ByteBuffer::from_hex(value).map_err(|source| OperandError::InvalidHex { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match kind {
        OperationKind::G1Add | OperationKind::G2Add => {
            let [lhs, rhs] = exactly_two(kind, buffers)?;
            Ok(Operands::Add { lhs, rhs })
        }
        OperationKind::G1Mul | OperationKind::G2Mul => {
            let [point, scalar] = exactly_two(kind, buffers)?;
            Ok(Operands::Mul { point, scalar })
        }
        OperationKind::G1MultiExp | OperationKind::G2MultiExp => Ok(Operands::MultiExp {
            pairs: into_pairs(kind, buffers)?,
            count,
        }),
        OperationKind::Pairing => Ok(Operands::Pairing {
            pairs: into_pairs(kind, buffers)?,
            count,
        }),
    }
}

fn exactly_two(kind: OperationKind, buffers: Vec<ByteBuffer>) -> Result<[ByteBuffer; 2], OperandError> {
    let actual = buffers.len();
    buffers.try_into().map_err(|_| OperandError::WrongCount {
        kind,
        expected: 2,
        actual,
    })
}

fn into_pairs(kind: OperationKind, buffers: Vec<ByteBuffer>) -> Result<Vec<OperandPair>, OperandError> {
    if buffers.len() % 2 != 0 {
        return Err(OperandError::Unpaired {
            kind,
            actual: buffers.len(),
        });
    }
    let mut pairs = Vec::with_capacity(buffers.len() / 2);
    let mut iter = buffers.into_iter();
    while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
        pairs.push((first, second));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_and_mul() {
        let operands = parse_operands(OperationKind::G1Add, &strings(&["0x0102", "0304"]), None).unwrap();
        assert_eq!(
            operands,
            Operands::Add {
                lhs: ByteBuffer::from([0x01, 0x02]),
                rhs: ByteBuffer::from([0x03, 0x04]),
            }
        );

        assert!(matches!(
            parse_operands(OperationKind::G2Mul, &strings(&["01"]), None),
            Err(OperandError::WrongCount {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_pairs() {
        let operands = parse_operands(
            OperationKind::Pairing,
            &strings(&["01", "02", "03", "04"]),
            Some(2),
        )
        .unwrap();
        match operands {
            Operands::Pairing { pairs, count } => {
                assert_eq!(count, Some(2));
                assert_eq!(pairs.len(), 2);
                assert_eq!(pairs[1].0, ByteBuffer::from([0x03]));
                assert_eq!(pairs[1].1, ByteBuffer::from([0x04]));
            }
            other => panic!("unexpected operands {:?}", other),
        }

        assert!(matches!(
            parse_operands(OperationKind::G1MultiExp, &strings(&["01", "02", "03"]), None),
            Err(OperandError::Unpaired { actual: 3, .. })
        ));
    }

    #[test]
    fn test_bad_hex_reports_position() {
        assert!(matches!(
            parse_operands(OperationKind::G1Add, &strings(&["01", "0g"]), None),
            Err(OperandError::InvalidHex { index: 1, .. })
        ));
    }
}
