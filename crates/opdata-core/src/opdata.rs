//! Op-data header encoding and parsing
//!
//! The header is the serialized [`CurveParameters`] the engine reads before
//! any operand. See [`crate::layout`] for the field order.
//!
//! Parsing is strict: a header is only accepted when every declared width,
//! tag and coordinate is coherent, so a single corrupted length byte cannot
//! shift the remaining fields into something that still parses.

use num_bigint::BigUint;

use crate::bytes::ByteBuffer;
use crate::constants::SUPPORTED_DEGREES;
use crate::errors::{BufferError, CodecError, HeaderError};
use crate::layout::Layout;
use crate::params::CurveParameters;
use crate::types::{CurveFamily, TwistType};

extern crate alloc;
use alloc::vec::Vec;

/// Serialized curve parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpData {
    bytes: ByteBuffer,
    layout: Layout,
}

impl OpData {
    /// Serialize `params` in the fixed header order.
    pub fn encode(params: &CurveParameters) -> Result<Self, BufferError> {
        let layout = params.layout();
        let field_len = layout.field_len;

        let mut parts = Vec::with_capacity(9 + layout.g2_coordinate_count());
        parts.push(ByteBuffer::from_uint8(params.family().tag().into())?);
        parts.push(ByteBuffer::from_uint8(field_len as u64)?);
        parts.push(ByteBuffer::from_uint(params.modulus(), field_len)?);
        parts.push(ByteBuffer::from_uint8(params.extension_degree().into())?);
        parts.push(ByteBuffer::from_uint8(layout.order_len as u64)?);
        parts.push(ByteBuffer::from_uint(params.order(), layout.order_len)?);
        parts.push(ByteBuffer::from_uint8(params.twist().tag().into())?);
        for coordinate in params.g1_generator() {
            parts.push(ByteBuffer::from_uint(coordinate, field_len)?);
        }
        for coordinate in params.g2_generator().unwrap_or_default() {
            parts.push(ByteBuffer::from_uint(coordinate, field_len)?);
        }

        let bytes = ByteBuffer::concat_all(&parts);
        debug_assert_eq!(bytes.len(), layout.header_len());
        crate::trace!(
            "encoded {} op-data: {} bytes (F={}, R={}, d={})",
            params.family(),
            bytes.len(),
            layout.field_len,
            layout.order_len,
            layout.extension_degree
        );

        Ok(Self { bytes, layout })
    }

    /// Accept an externally supplied op-data buffer after a full header check.
    pub fn from_bytes(bytes: ByteBuffer) -> Result<Self, HeaderError> {
        let header = parse_header(&bytes)?;
        if header.byte_len() != bytes.len() {
            return Err(HeaderError::LengthMismatch {
                expected: header.byte_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            layout: header.layout,
        })
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

    /// Recover the parameters this op-data was encoded from
    pub fn decode(&self) -> Result<CurveParameters, CodecError> {
        decode(&self.bytes)
    }
}

/// Serialize `params` (see [`OpData::encode`])
pub fn encode(params: &CurveParameters) -> Result<OpData, BufferError> {
    OpData::encode(params)
}

/// Whether `bytes` is exactly one well-formed op-data header.
///
/// Never fails: malformed input, including anything from an untrusted source,
/// is reported as `false`.
pub fn lengths_consistent(bytes: &[u8]) -> bool {
    match parse_header(bytes) {
        Ok(header) => header.byte_len() == bytes.len(),
        Err(err) => {
            crate::trace!("rejected op-data header: {}", err);
            false
        }
    }
}

/// Decode a complete op-data buffer back into curve parameters
pub fn decode(bytes: &[u8]) -> Result<CurveParameters, CodecError> {
    let header = parse_header(bytes)?;
    if header.byte_len() != bytes.len() {
        return Err(HeaderError::LengthMismatch {
            expected: header.byte_len(),
            actual: bytes.len(),
        }
        .into());
    }
    Ok(header.into_params()?)
}

/// A parsed op-data header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub family: CurveFamily,
    pub twist: TwistType,
    pub layout: Layout,
    modulus: BigUint,
    order: BigUint,
    g1_generator: [BigUint; 2],
    g2_generator: Vec<BigUint>,
}

impl Header {
    /// Number of bytes the header occupies
    pub fn byte_len(&self) -> usize {
        self.layout.header_len()
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn into_params(self) -> Result<CurveParameters, crate::errors::ParamsError> {
        CurveParameters::new(
            self.family,
            self.modulus,
            self.layout.extension_degree,
            self.order,
            self.twist,
            self.g1_generator,
            self.g2_generator,
        )
    }
}

/// Parse the op-data header at the start of `bytes`.
///
/// Trailing bytes (an operand section) are allowed; compare [`Header::byte_len`]
/// with the buffer length to require an exact fit.
pub fn parse_header(bytes: &[u8]) -> Result<Header, HeaderError> {
    let mut reader = Reader::new(bytes);

    let family_tag = reader.u8()?;
    let family = CurveFamily::from_tag(family_tag).ok_or(HeaderError::UnknownFamily(family_tag))?;

    let field_len = reader.u8()? as usize;
    if field_len == 0 {
        return Err(HeaderError::ZeroLength("field"));
    }
    let modulus = reader.canonical(field_len, "modulus")?;
    if modulus.bits() < 2 {
        return Err(HeaderError::ModulusTooSmall);
    }

    let degree = reader.u8()?;
    if !SUPPORTED_DEGREES.contains(&degree) {
        return Err(HeaderError::UnsupportedDegree(degree));
    }

    let order_len = reader.u8()? as usize;
    if order_len == 0 {
        return Err(HeaderError::ZeroLength("group order"));
    }
    let order = reader.canonical(order_len, "group order")?;

    let twist_tag = reader.u8()?;
    let twist = TwistType::from_tag(twist_tag).ok_or(HeaderError::UnknownTwist(twist_tag))?;
    if !twist.fits_degree(degree) {
        return Err(HeaderError::TwistMismatch { twist, degree });
    }

    let layout = Layout::new(field_len, order_len, degree);

    let g1_x = reader.element(field_len, &modulus, "G1 generator x")?;
    let g1_y = reader.element(field_len, &modulus, "G1 generator y")?;

    let mut g2_generator = Vec::with_capacity(layout.g2_coordinate_count());
    for _ in 0..layout.g2_coordinate_count() {
        g2_generator.push(reader.element(field_len, &modulus, "G2 generator coordinate")?);
    }

    debug_assert_eq!(reader.position(), layout.header_len());

    Ok(Header {
        family,
        twist,
        layout,
        modulus,
        order,
        g1_generator: [g1_x, g1_y],
        g2_generator,
    })
}

/// Forward-only cursor over a header
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], HeaderError> {
        let end = self.pos.saturating_add(len);
        if end > self.bytes.len() {
            return Err(HeaderError::Truncated {
                needed: end,
                actual: self.bytes.len(),
            });
        }
        let out = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, HeaderError> {
        Ok(self.take(1)?[0])
    }

    /// Big-endian integer whose declared width must be its minimal width
    fn canonical(&mut self, len: usize, what: &'static str) -> Result<BigUint, HeaderError> {
        let raw = self.take(len)?;
        if raw[0] == 0 {
            return Err(HeaderError::NonCanonical(what));
        }
        Ok(BigUint::from_bytes_be(raw))
    }

    /// Base field element (must be below the modulus)
    fn element(
        &mut self,
        len: usize,
        modulus: &BigUint,
        what: &'static str,
    ) -> Result<BigUint, HeaderError> {
        let value = BigUint::from_bytes_be(self.take(len)?);
        if value >= *modulus {
            return Err(HeaderError::CoordinateOutOfField(what));
        }
        Ok(value)
    }
}
