//! Immutable byte buffers with exact-width big-endian encoding
//!
//! Every operation returns a new buffer; nothing here mutates its input.
//! Widths and offsets are checked up front, so a wrong length is an error
//! instead of a silently shifted field.

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use num_bigint::BigUint;

use crate::errors::BufferError;

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// An immutable, ordered sequence of bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteBuffer(Vec<u8>);

impl ByteBuffer {
    /// Empty buffer
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wrap bytes as a buffer
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, BufferError> {
        let s = s.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        Ok(Self(hex::decode(s)?))
    }

    /// Encode `value` as exactly `width` big-endian bytes, zero-padded on the left.
    ///
    /// Fails with [`BufferError::Overflow`] when `value >= 256^width`.
    pub fn from_uint(value: &BigUint, width: usize) -> Result<Self, BufferError> {
        let bits = value.bits();
        if bits > (width as u64) * 8 {
            return Err(BufferError::Overflow { bits, width });
        }

        let mut out = Vec::with_capacity(width);
        if bits == 0 {
            out.resize(width, 0);
            return Ok(Self(out));
        }

        let significant = value.to_bytes_be();
        out.resize(width - significant.len(), 0);
        out.extend_from_slice(&significant);
        Ok(Self(out))
    }

    /// [`ByteBuffer::from_uint`] for machine integers
    pub fn from_u64(value: u64, width: usize) -> Result<Self, BufferError> {
        Self::from_uint(&BigUint::from(value), width)
    }

    /// Single-byte encoding; fails with [`BufferError::Overflow`] above 255.
    pub fn from_uint8(value: u64) -> Result<Self, BufferError> {
        Self::from_u64(value, 1)
    }

    /// Decode the whole buffer as a big-endian unsigned integer
    pub fn to_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Structural equality: same length, same bytes.
    pub fn equal(&self, other: &ByteBuffer) -> bool {
        self.0 == other.0
    }

    /// `self` followed by `other`
    pub fn concat(&self, other: &ByteBuffer) -> ByteBuffer {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(&self.0);
        out.extend_from_slice(&other.0);
        Self(out)
    }

    /// Concatenate any number of buffers in order
    pub fn concat_all<'a, I>(parts: I) -> ByteBuffer
    where
        I: IntoIterator<Item = &'a ByteBuffer>,
    {
        let mut out = Vec::new();
        for part in parts {
            out.extend_from_slice(&part.0);
        }
        Self(out)
    }

    /// `length` bytes starting at `offset`.
    ///
    /// Fails with [`BufferError::OutOfRange`] when the range runs past the end.
    pub fn slice(&self, offset: usize, length: usize) -> Result<ByteBuffer, BufferError> {
        let range = self.checked_range(offset, length)?;
        Ok(Self(self.0[range].to_vec()))
    }

    /// Byte at `offset`
    pub fn byte_at(&self, offset: usize) -> Result<u8, BufferError> {
        let range = self.checked_range(offset, 1)?;
        Ok(self.0[range.start])
    }

    /// Hex without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    fn checked_range(
        &self,
        offset: usize,
        length: usize,
    ) -> Result<core::ops::Range<usize>, BufferError> {
        let out_of_range = BufferError::OutOfRange {
            offset,
            length,
            available: self.len(),
        };
        match offset.checked_add(length) {
            Some(end) if end <= self.len() => Ok(offset..end),
            _ => Err(out_of_range),
        }
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buf: ByteBuffer) -> Self {
        buf.0
    }
}

impl FromStr for ByteBuffer {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer({} bytes: 0x{})", self.len(), self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_slice_middle() {
        let buf = ByteBuffer::from([0x00, 0xaa, 0xf1, 0xab, 0x51]);
        let slice = buf.slice(2, 2).unwrap();
        assert!(slice.equal(&ByteBuffer::from([0xf1, 0xab])));
        assert!(!slice.equal(&ByteBuffer::from([0xaa, 0xf1])));
    }

    #[test]
    fn test_slice_bounds() {
        let buf = ByteBuffer::from([1, 2, 3]);
        assert_eq!(buf.slice(3, 0).unwrap(), ByteBuffer::empty());
        assert_eq!(buf.slice(0, 3).unwrap(), buf);
        assert_eq!(
            buf.slice(2, 2),
            Err(BufferError::OutOfRange {
                offset: 2,
                length: 2,
                available: 3
            })
        );
        assert!(buf.slice(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_from_uint_padding() {
        let buf = ByteBuffer::from_u64(257, 4).unwrap();
        assert!(buf.equal(&ByteBuffer::from([0x00, 0x00, 0x01, 0x01])));

        let other = ByteBuffer::from_u64(259, 4).unwrap();
        assert!(!other.equal(&ByteBuffer::from([0x00, 0x00, 0x01, 0x01])));
    }

    #[test]
    fn test_from_uint_zero() {
        assert_eq!(ByteBuffer::from_u64(0, 3).unwrap().as_bytes(), &[0, 0, 0]);
        assert_eq!(ByteBuffer::from_u64(0, 0).unwrap(), ByteBuffer::empty());
    }

    #[test]
    fn test_from_uint_overflow() {
        assert_eq!(
            ByteBuffer::from_u64(0x1_0000, 2),
            Err(BufferError::Overflow { bits: 17, width: 2 })
        );
        assert!(ByteBuffer::from_u64(0xffff, 2).is_ok());
        assert!(ByteBuffer::from_u64(1, 0).is_err());
    }

    #[test]
    fn test_from_uint8() {
        let buf = ByteBuffer::from_uint8(128).unwrap();
        assert!(buf.equal(&ByteBuffer::from([0x80])));
        assert!(ByteBuffer::from_uint8(255).is_ok());
        assert!(matches!(
            ByteBuffer::from_uint8(256),
            Err(BufferError::Overflow { width: 1, .. })
        ));
    }

    #[test]
    fn test_concat() {
        let joined = ByteBuffer::from([0x02, 0x82]).concat(&ByteBuffer::from([0x12, 0xf2]));
        assert!(joined.equal(&ByteBuffer::from([0x02, 0x82, 0x12, 0xf2])));
        assert!(!joined.equal(&ByteBuffer::from([0x01, 0x82, 0x12, 0xf2])));
    }

    #[test]
    fn test_concat_all_matches_pairwise() {
        let a = ByteBuffer::from([1]);
        let b = ByteBuffer::from([2, 3]);
        let c = ByteBuffer::empty();
        let d = ByteBuffer::from([4]);
        assert_eq!(
            ByteBuffer::concat_all([&a, &b, &c, &d]),
            a.concat(&b).concat(&c).concat(&d)
        );
    }

    #[test]
    fn test_equal_requires_same_length() {
        let a = ByteBuffer::from([0x00, 0x01]);
        let b = ByteBuffer::from([0x01]);
        assert!(!a.equal(&b));
        assert_eq!(a.to_uint(), b.to_uint());
    }

    #[test]
    fn test_byte_at() {
        let buf = ByteBuffer::from([9, 8]);
        assert_eq!(buf.byte_at(1).unwrap(), 8);
        assert!(buf.byte_at(2).is_err());
    }

    #[test]
    fn test_hex() {
        let buf: ByteBuffer = "0x0aFF".parse().unwrap();
        assert_eq!(buf.into_vec(), vec![0x0a, 0xff]);
        assert!(ByteBuffer::from_hex("abc").is_err());
        assert_eq!(ByteBuffer::from([0xde, 0xad]).to_string(), "0xdead");
    }
}
