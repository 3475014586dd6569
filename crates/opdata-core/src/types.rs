//! Core tags and operation kinds
//!
//! Tag values are the single-byte codes written into op-data headers.

use core::fmt;
use core::str::FromStr;

use crate::errors::UnknownName;

/// Curve family tag (first byte of every op-data header)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CurveFamily {
    Bls12 = 0x01,
    Bn = 0x02,
    Mnt4 = 0x03,
    Mnt6 = 0x04,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 4] = [
        CurveFamily::Bls12,
        CurveFamily::Bn,
        CurveFamily::Mnt4,
        CurveFamily::Mnt6,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveFamily::Bls12 => "bls12",
            CurveFamily::Bn => "bn",
            CurveFamily::Mnt4 => "mnt4",
            CurveFamily::Mnt6 => "mnt6",
        }
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName::new("curve family", s))
    }
}

/// Twist type of the G2 curve
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwistType {
    /// No twist (curves without a G2 over an extension)
    None = 0x00,
    M = 0x01,
    D = 0x02,
}

impl TwistType {
    pub const ALL: [TwistType; 3] = [TwistType::None, TwistType::M, TwistType::D];

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            TwistType::None => "none",
            TwistType::M => "m",
            TwistType::D => "d",
        }
    }

    /// A twist is present exactly when G2 lives over a proper extension.
    pub fn fits_degree(self, degree: u8) -> bool {
        (self == TwistType::None) == (degree == 1)
    }
}

impl fmt::Display for TwistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistType::None => f.write_str("none"),
            TwistType::M => f.write_str("M-type"),
            TwistType::D => f.write_str("D-type"),
        }
    }
}

impl FromStr for TwistType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end_matches("-type").trim_end_matches("-TYPE");
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName::new("twist type", s))
    }
}

/// Curve group an operand belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    G1,
    G2,
}

/// Operation kinds understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    G1Add,
    G1Mul,
    G1MultiExp,
    G2Add,
    G2Mul,
    G2MultiExp,
    Pairing,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::G1Add,
        OperationKind::G1Mul,
        OperationKind::G1MultiExp,
        OperationKind::G2Add,
        OperationKind::G2Mul,
        OperationKind::G2MultiExp,
        OperationKind::Pairing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::G1Add => "g1-add",
            OperationKind::G1Mul => "g1-mul",
            OperationKind::G1MultiExp => "g1-multiexp",
            OperationKind::G2Add => "g2-add",
            OperationKind::G2Mul => "g2-mul",
            OperationKind::G2MultiExp => "g2-multiexp",
            OperationKind::Pairing => "pairing",
        }
    }

    /// Group whose points make up the operands (and the result).
    /// `None` for pairings, which mix both groups.
    pub fn group(self) -> Option<Group> {
        match self {
            OperationKind::G1Add | OperationKind::G1Mul | OperationKind::G1MultiExp => {
                Some(Group::G1)
            }
            OperationKind::G2Add | OperationKind::G2Mul | OperationKind::G2MultiExp => {
                Some(Group::G2)
            }
            OperationKind::Pairing => None,
        }
    }

    /// Whether the operand section starts with a one-byte pair count
    pub fn has_pair_count(self) -> bool {
        matches!(
            self,
            OperationKind::G1MultiExp | OperationKind::G2MultiExp | OperationKind::Pairing
        )
    }

    /// Whether the operation touches G2 and therefore needs an extension degree > 1
    pub fn needs_g2(self) -> bool {
        self.group() != Some(Group::G1)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownName::new("operation kind", s))
    }
}
