//! Byte-exact curve op-data and operation inputs for generic pairing engines
//!
//! A generic elliptic-curve engine learns which curve to work on from an
//! op-data header prepended to every operation input. This crate encodes and
//! parses that header, builds inputs for the seven supported operations and
//! checks engine results against expectations. It never does curve
//! arithmetic itself.
//!
//! # Example
//!
//! ```
//! use curve_opdata_core::{curves, inputs, ByteBuffer, OperationKind};
//!
//! let params = curves::bls12_384_m().unwrap();
//! let g1 = ByteBuffer::from(curves::BLS12_384_M.g1_generator[0])
//!     .concat(&ByteBuffer::from(curves::BLS12_384_M.g1_generator[1]));
//!
//! let input = inputs::g1_add(&params, &g1, &g1).unwrap();
//! assert!(inputs::input_length_valid(OperationKind::G1Add, input.as_buffer()));
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod bytes;
pub mod constants;
pub mod curves;
pub mod debug;
pub mod errors;
pub mod inputs;
pub mod layout;
pub mod opdata;
pub mod params;
pub mod results;
pub mod types;

pub use bytes::ByteBuffer;
pub use errors::{BufferError, CodecError, HeaderError, InputError, ParamsError, UnknownName};
pub use inputs::{OperandPair, Operands, OperationInput};
pub use layout::Layout;
pub use opdata::{Header, OpData};
pub use params::CurveParameters;
pub use types::{CurveFamily, Group, OperationKind, TwistType};

pub use num_bigint::BigUint;

#[cfg(feature = "debug")]
#[doc(hidden)]
pub use log as __log;
