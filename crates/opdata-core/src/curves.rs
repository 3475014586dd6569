//! Named curve table
//!
//! Each entry is static data; turning it into [`CurveParameters`] runs the
//! same validation as parameters from any other source. Supporting another
//! family means adding an entry here (or in a CLI config file).

use num_bigint::BigUint;

use crate::constants::*;
use crate::errors::ParamsError;
use crate::params::CurveParameters;
use crate::types::{CurveFamily, TwistType};

extern crate alloc;
use alloc::vec::Vec;

/// Static description of a named curve. Integers are big-endian bytes.
#[derive(Debug, Clone, Copy)]
pub struct NamedCurve {
    pub name: &'static str,
    pub family: CurveFamily,
    pub modulus: &'static [u8],
    pub extension_degree: u8,
    pub order: &'static [u8],
    pub twist: TwistType,
    pub g1_generator: [&'static [u8]; 2],
    /// x components then y components; empty for degree 1
    pub g2_generator: &'static [&'static [u8]],
}

impl NamedCurve {
    pub fn params(&self) -> Result<CurveParameters, ParamsError> {
        let [x, y] = self.g1_generator;
        CurveParameters::new(
            self.family,
            BigUint::from_bytes_be(self.modulus),
            self.extension_degree,
            BigUint::from_bytes_be(self.order),
            self.twist,
            [BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)],
            self.g2_generator
                .iter()
                .map(|c| BigUint::from_bytes_be(c))
                .collect::<Vec<_>>(),
        )
    }
}

pub const BLS12_384_M: NamedCurve = NamedCurve {
    name: BLS12_384_M_NAME,
    family: CurveFamily::Bls12,
    modulus: &BLS12_384_M_MODULUS,
    extension_degree: BLS12_384_M_DEGREE,
    order: &BLS12_384_M_ORDER,
    twist: TwistType::M,
    g1_generator: [&BLS12_384_M_G1_X, &BLS12_384_M_G1_Y],
    g2_generator: &[
        &BLS12_384_M_G2_X_C0,
        &BLS12_384_M_G2_X_C1,
        &BLS12_384_M_G2_Y_C0,
        &BLS12_384_M_G2_Y_C1,
    ],
};

/// All built-in curves
pub const NAMED_CURVES: &[NamedCurve] = &[BLS12_384_M];

/// Case-insensitive lookup; `_` and `-` are interchangeable.
pub fn lookup(name: &str) -> Option<&'static NamedCurve> {
    NAMED_CURVES
        .iter()
        .find(|curve| names_match(curve.name, name))
}

/// BLS12-384-M parameters
pub fn bls12_384_m() -> Result<CurveParameters, ParamsError> {
    BLS12_384_M.params()
}

fn names_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes().zip(b.bytes()).all(|(x, y)| {
            let norm = |c: u8| if c == b'_' { b'-' } else { c.to_ascii_lowercase() };
            norm(x) == norm(y)
        })
}
