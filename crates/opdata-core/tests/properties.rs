//! Property-based tests for buffers, headers and operation inputs

use curve_opdata_core::inputs::{self, OperandPair};
use curve_opdata_core::opdata;
use curve_opdata_core::{
    BigUint, BufferError, ByteBuffer, CurveFamily, CurveParameters, OperationKind, TwistType,
};
use proptest::prelude::*;

/// F = 3, R = 2, d = 2
fn toy() -> CurveParameters {
    let n = BigUint::from;
    CurveParameters::new(
        CurveFamily::Mnt4,
        n(65537u32),
        2,
        n(257u32),
        TwistType::D,
        [n(5u32), n(6u32)],
        vec![n(1u32), n(2u32), n(3u32), n(4u32)],
    )
    .unwrap()
}

fn buffer() -> impl Strategy<Value = ByteBuffer> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(ByteBuffer::from)
}

/// `count` G2 multiexp pairs on the toy curve: 12-byte points, 2-byte scalars
fn g2_pairs(count: usize) -> impl Strategy<Value = Vec<OperandPair>> {
    prop::collection::vec(
        (any::<[u8; 12]>(), any::<[u8; 2]>())
            .prop_map(|(point, scalar)| (ByteBuffer::from(point), ByteBuffer::from(scalar))),
        count,
    )
}

proptest! {
    #[test]
    fn concat_is_associative(a in buffer(), b in buffer(), c in buffer()) {
        let left = a.concat(&b).concat(&c);
        let right = a.concat(&b.concat(&c));
        prop_assert!(left.equal(&right));
        prop_assert_eq!(left.len(), a.len() + b.len() + c.len());
        prop_assert!(ByteBuffer::concat_all([&a, &b, &c]).equal(&left));
    }

    #[test]
    fn concat_with_empty_is_identity(a in buffer()) {
        prop_assert!(a.concat(&ByteBuffer::empty()).equal(&a));
        prop_assert!(ByteBuffer::empty().concat(&a).equal(&a));
    }

    #[test]
    fn fixed_width_uint(value in any::<u64>(), width in 0usize..12) {
        let big = BigUint::from(value);
        let fits = big.bits() <= 8 * width as u64;
        match ByteBuffer::from_uint(&big, width) {
            Ok(encoded) => {
                prop_assert!(fits);
                prop_assert_eq!(encoded.len(), width);
                prop_assert_eq!(encoded.to_uint(), big);
            }
            Err(BufferError::Overflow { .. }) => prop_assert!(!fits),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn slice_stays_in_bounds(a in buffer(), offset in 0usize..80, length in 0usize..80) {
        match a.slice(offset, length) {
            Ok(part) => {
                prop_assert!(offset + length <= a.len());
                prop_assert_eq!(part.as_bytes(), &a[offset..offset + length]);
            }
            Err(_) => prop_assert!(offset + length > a.len()),
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let consistent = opdata::lengths_consistent(&bytes);
        prop_assert_eq!(consistent, opdata::decode(&bytes).is_ok());
        for kind in OperationKind::ALL {
            let _ = inputs::input_length_valid(kind, &bytes);
        }
    }

    #[test]
    fn built_multiexp_validates(pairs in (1usize..16).prop_flat_map(g2_pairs)) {
        let params = toy();
        let input = inputs::g2_multiexp(&params, &pairs, Some(pairs.len())).unwrap();
        let layout = params.layout();
        prop_assert_eq!(input.len(), layout.input_len(OperationKind::G2MultiExp, pairs.len()));
        prop_assert!(inputs::input_length_valid(OperationKind::G2MultiExp, input.as_buffer()));

        let short = input.as_buffer().slice(0, input.len() - 1).unwrap();
        prop_assert!(!inputs::input_length_valid(OperationKind::G2MultiExp, &short));
        let long = input.as_buffer().concat(&ByteBuffer::from([0u8]));
        prop_assert!(!inputs::input_length_valid(OperationKind::G2MultiExp, &long));
    }

    #[test]
    fn declared_count_must_match(pairs in (1usize..8).prop_flat_map(g2_pairs), extra in 1usize..4) {
        let result = inputs::g2_multiexp(&toy(), &pairs, Some(pairs.len() + extra));
        prop_assert!(result.is_err());
    }
}
