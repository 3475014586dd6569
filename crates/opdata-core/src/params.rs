//! Curve parameter sets
//!
//! A [`CurveParameters`] value is plain data. Widths are derived from the
//! modulus and order, never supplied, so they cannot disagree with the values.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{MAX_ELEMENT_LEN, SUPPORTED_DEGREES};
use crate::errors::ParamsError;
use crate::layout::Layout;
use crate::types::{CurveFamily, TwistType};

extern crate alloc;
use alloc::vec::Vec;

/// Byte width of `value`: ceil(bits / 8)
pub fn byte_len(value: &BigUint) -> usize {
    value.bits().div_ceil(8) as usize
}

/// Validated parameters of one curve family
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurveParameters {
    family: CurveFamily,
    modulus: BigUint,
    order: BigUint,
    twist: TwistType,
    g1_generator: [BigUint; 2],
    /// x.c0..x.c(d-1), y.c0..y.c(d-1); empty for degree 1
    g2_generator: Vec<BigUint>,
    layout: Layout,
}

impl CurveParameters {
    /// Validate and assemble a parameter set.
    ///
    /// `g2_generator` holds `2 * extension_degree` coordinates, x components
    /// first, and must be empty when `extension_degree` is 1.
    pub fn new(
        family: CurveFamily,
        modulus: BigUint,
        extension_degree: u8,
        order: BigUint,
        twist: TwistType,
        g1_generator: [BigUint; 2],
        g2_generator: Vec<BigUint>,
    ) -> Result<Self, ParamsError> {
        if modulus <= BigUint::one() {
            return Err(ParamsError::ModulusTooSmall);
        }
        let field_len = byte_len(&modulus);
        if field_len > MAX_ELEMENT_LEN {
            return Err(ParamsError::ModulusTooWide(field_len));
        }

        if order.is_zero() {
            return Err(ParamsError::ZeroOrder);
        }
        let order_len = byte_len(&order);
        if order_len > MAX_ELEMENT_LEN {
            return Err(ParamsError::OrderTooWide(order_len));
        }

        if !SUPPORTED_DEGREES.contains(&extension_degree) {
            return Err(ParamsError::UnsupportedDegree(extension_degree));
        }
        if !twist.fits_degree(extension_degree) {
            return Err(ParamsError::TwistMismatch {
                twist,
                degree: extension_degree,
            });
        }

        let layout = Layout::new(field_len, order_len, extension_degree);
        if g2_generator.len() != layout.g2_coordinate_count() {
            return Err(ParamsError::G2Shape {
                expected: layout.g2_coordinate_count(),
                actual: g2_generator.len(),
            });
        }

        if g1_generator[0] >= modulus {
            return Err(ParamsError::CoordinateOutOfField("G1 generator x"));
        }
        if g1_generator[1] >= modulus {
            return Err(ParamsError::CoordinateOutOfField("G1 generator y"));
        }
        if g2_generator.iter().any(|c| *c >= modulus) {
            return Err(ParamsError::CoordinateOutOfField("G2 generator coordinate"));
        }

        Ok(Self {
            family,
            modulus,
            order,
            twist,
            g1_generator,
            g2_generator,
            layout,
        })
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn twist(&self) -> TwistType {
        self.twist
    }

    pub fn extension_degree(&self) -> u8 {
        self.layout.extension_degree
    }

    pub fn field_len(&self) -> usize {
        self.layout.field_len
    }

    pub fn order_len(&self) -> usize {
        self.layout.order_len
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn g1_generator(&self) -> &[BigUint; 2] {
        &self.g1_generator
    }

    /// G2 generator coordinates, or `None` on degree-1 curves
    pub fn g2_generator(&self) -> Option<&[BigUint]> {
        if self.g2_generator.is_empty() {
            None
        } else {
            Some(&self.g2_generator)
        }
    }
}
