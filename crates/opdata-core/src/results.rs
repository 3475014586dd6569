//! Engine result checks
//!
//! Group operations return one point of the operand group; a pairing check
//! returns a single byte, `0x01` when the product of pairings is the identity.

use crate::bytes::ByteBuffer;
use crate::inputs::OperationInput;
use crate::layout::Layout;
use crate::types::OperationKind;

/// Width the engine's result must have for `kind` on this layout.
pub fn expected_result_len(kind: OperationKind, layout: &Layout) -> usize {
    layout.result_len(kind)
}

/// Both buffers have the result width for `kind` and are byte-identical.
pub fn result_matches(
    kind: OperationKind,
    layout: &Layout,
    actual: &ByteBuffer,
    expected: &ByteBuffer,
) -> bool {
    let width = expected_result_len(kind, layout);
    if actual.len() != width || expected.len() != width {
        crate::trace!(
            "{} result width mismatch: expected {}, got actual {} / expected {}",
            kind,
            width,
            actual.len(),
            expected.len()
        );
        return false;
    }
    actual.equal(expected)
}

/// Compare an engine result against the expectation for a built input.
pub fn check_result(input: &OperationInput, actual: &ByteBuffer, expected: &ByteBuffer) -> bool {
    result_matches(input.kind(), &input.layout(), actual, expected)
}

/// Decode a pairing check result. `None` unless it is exactly `0x00` or `0x01`.
pub fn pairing_result(result: &[u8]) -> Option<bool> {
    match result {
        [0x00] => Some(false),
        [0x01] => Some(true),
        _ => None,
    }
}
