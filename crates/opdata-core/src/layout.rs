//! Width arithmetic shared by encoding, building and validation
//!
//! ## Op-data header (all integers big-endian):
//! - family tag: 1 byte
//! - field length `F`: 1 byte
//! - modulus: `F` bytes
//! - extension degree `d`: 1 byte
//! - order length `R`: 1 byte
//! - group order: `R` bytes
//! - twist tag: 1 byte
//! - G1 generator x, y: 2 × `F` bytes
//! - G2 generator (only when `d > 1`): x.c0..x.c(d-1), y.c0..y.c(d-1), 2 × `d` × `F` bytes
//!
//! ## Operand sections:
//! - add: point || point
//! - mul: point || scalar (`R` bytes)
//! - multiexp: count (1 byte) || (point || scalar) × count
//! - pairing: count (1 byte) || (G1 point || G2 point) × count

use crate::constants::{PAIRING_RESULT_LEN, PAIR_COUNT_LEN, TAG_LEN};
use crate::types::{Group, OperationKind};

/// Element widths declared by an op-data header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Base field element width in bytes
    pub field_len: usize,
    /// Group order (and scalar) width in bytes
    pub order_len: usize,
    /// Degree of the field G2 is defined over
    pub extension_degree: u8,
}

impl Layout {
    pub fn new(field_len: usize, order_len: usize, extension_degree: u8) -> Self {
        Self {
            field_len,
            order_len,
            extension_degree,
        }
    }

    /// Whether the curve has a G2 over a proper extension
    pub fn has_g2(&self) -> bool {
        self.extension_degree > 1
    }

    /// Number of base field coordinates in the G2 generator (0 without G2)
    pub fn g2_coordinate_count(&self) -> usize {
        if self.has_g2() {
            2 * self.extension_degree as usize
        } else {
            0
        }
    }

    /// Total op-data header length
    pub fn header_len(&self) -> usize {
        // family, field length, degree, order length, twist
        5 * TAG_LEN
            + self.field_len // modulus
            + self.order_len // order
            + 2 * self.field_len // G1 generator
            + self.g2_coordinate_count() * self.field_len // G2 generator
    }

    pub fn g1_point_len(&self) -> usize {
        2 * self.field_len
    }

    pub fn g2_point_len(&self) -> usize {
        2 * self.field_len * self.extension_degree as usize
    }

    pub fn point_len(&self, group: Group) -> usize {
        match group {
            Group::G1 => self.g1_point_len(),
            Group::G2 => self.g2_point_len(),
        }
    }

    pub fn scalar_len(&self) -> usize {
        self.order_len
    }

    /// Width of one (point, scalar) or (G1, G2) pair; `None` for kinds without pairs.
    pub fn pair_len(&self, kind: OperationKind) -> Option<usize> {
        match kind {
            OperationKind::G1MultiExp => Some(self.g1_point_len() + self.scalar_len()),
            OperationKind::G2MultiExp => Some(self.g2_point_len() + self.scalar_len()),
            OperationKind::Pairing => Some(self.g1_point_len() + self.g2_point_len()),
            _ => None,
        }
    }

    /// Operand section length. `pairs` is ignored for kinds without a pair count.
    pub fn operand_len(&self, kind: OperationKind, pairs: usize) -> usize {
        match kind {
            OperationKind::G1Add => 2 * self.g1_point_len(),
            OperationKind::G2Add => 2 * self.g2_point_len(),
            OperationKind::G1Mul => self.g1_point_len() + self.scalar_len(),
            OperationKind::G2Mul => self.g2_point_len() + self.scalar_len(),
            OperationKind::G1MultiExp | OperationKind::G2MultiExp | OperationKind::Pairing => {
                PAIR_COUNT_LEN + pairs * self.pair_len(kind).unwrap_or_default()
            }
        }
    }

    /// Full operation input length: header plus operand section
    pub fn input_len(&self, kind: OperationKind, pairs: usize) -> usize {
        self.header_len() + self.operand_len(kind, pairs)
    }

    /// Width of the engine's result for `kind`
    pub fn result_len(&self, kind: OperationKind) -> usize {
        match kind.group() {
            Some(group) => self.point_len(group),
            None => PAIRING_RESULT_LEN,
        }
    }
}
