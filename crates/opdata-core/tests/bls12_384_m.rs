//! End-to-end checks against BLS12-384-M reference points
//!
//! The multiples below were computed off-line. They let the tests drive the
//! full build / validate / compare cycle with the results a correct engine
//! would return.

use curve_opdata_core::constants::*;
use curve_opdata_core::curves::{self, BLS12_384_M};
use curve_opdata_core::inputs::{self, OperationInput};
use curve_opdata_core::opdata::{self, OpData};
use curve_opdata_core::results::{check_result, pairing_result, result_matches};
use curve_opdata_core::{BigUint, ByteBuffer, CurveParameters, OperationKind};
use hex_literal::hex;

/// 2·G1
const G1_DOUBLE: [u8; 96] = hex!(
    "69c41af1bc6950dfc9a19776b985fab212aa62d5a226e624b8c565493d2cef6e"
    "abef77956de2717f6072d8d9dbace8c3485c05ac570974effd9fe78427a0ca65"
    "c46fc87ecfd0a1b5584911c3787ebfe14700522ad45e2428ca31a6ac070d2ae8"
);

/// 3·G1
const G1_TRIPLE: [u8; 96] = hex!(
    "80658d81fd06592db752b37bf60154ddf902cbfd3a0aaff0cd8b256542ec7362"
    "c82d4d674ee66125acd431adcafe88ae4caf701e8f8c94a392559b6258387155"
    "4c5e6a9b26aed6c46629e587d5dd5b88216b9daa4d34fd7e3dd44fd3bc3ca209"
);

/// 2·G2
const G2_DOUBLE: [u8; 192] = hex!(
    "6fd53404fbb34c18793ece05ceed00f9225afc83b6fc60aca384f1b4f083b9f7"
    "ea4611baad748d48a19834ed4f71684f2c2d7afff90887dcb8cf5fce8889afbf"
    "ba3bc2e00eaad76980d2dbd66ffd435ef1147d02170dddd4efdfb5bc59fafa61"
    "4d3c8cd5cb4ffcbb406a4d826ab6adf385f3aa8e90b7f9af0bd7f53ba17f00de"
    "b032f6fdecfbab1a7eea8e37645a1bb322a24380c3da7387acfaeb4b2c97fc22"
    "05df93f33d1abbda6c8722c5bab0cac4400e06cf16cfc89c4ed0e4b6618a243d"
);

/// 3·G2
const G2_TRIPLE: [u8; 192] = hex!(
    "a457fd8f3510596c18540e243fa0819431f77d74ccf7fa6e866a558fa2a609c5"
    "86a1bcd319024e9fef4ddc67d4963b0755b5fa418c2380c37092d485c2861baa"
    "cc2759cd96745d54b405bc7defc462dee7935b4b76bf64e742d213ee29ab25fb"
    "6d4f2461361c675bd8db3b42dfeb681c5249baf682cc29a1715540de7e800c62"
    "2ccc708b66e93b12b897470aaf1576fe3b126d6a5141e9c4215d03199c62a24b"
    "6c6d58133000cb46fde8bc285f2f60af33fc85646df6e66bcdbe4256ff6ea584"
);

const B: u64 = 6;

fn params() -> CurveParameters {
    curves::bls12_384_m().unwrap()
}

fn g1() -> ByteBuffer {
    ByteBuffer::from(BLS12_384_M_G1_X).concat(&ByteBuffer::from(BLS12_384_M_G1_Y))
}

fn g2() -> ByteBuffer {
    ByteBuffer::concat_all(&[
        ByteBuffer::from(BLS12_384_M_G2_X_C0),
        ByteBuffer::from(BLS12_384_M_G2_X_C1),
        ByteBuffer::from(BLS12_384_M_G2_Y_C0),
        ByteBuffer::from(BLS12_384_M_G2_Y_C1),
    ])
}

fn scalar(v: u64) -> ByteBuffer {
    ByteBuffer::from_u64(v, params().order_len()).unwrap()
}

fn coordinates(point: &[u8], count: usize) -> Vec<BigUint> {
    point
        .chunks(point.len() / count)
        .map(BigUint::from_bytes_be)
        .collect()
}

/// y^2 == x^3 + 6 over Fp
fn on_g1(point: &[u8]) -> bool {
    let p = params().modulus().clone();
    let c = coordinates(point, 2);
    let (x, y) = (&c[0], &c[1]);
    (y * y) % &p == (x * x * x + BigUint::from(B)) % &p
}

/// y^2 == x^3 + 6(2 + u) over Fp[u] / (u^2 + 1)
fn on_g2(point: &[u8]) -> bool {
    let p = params().modulus().clone();
    let mul = |a: &(BigUint, BigUint), b: &(BigUint, BigUint)| {
        let re = (&a.0 * &b.0 + &p * &p - (&a.1 * &b.1) % (&p * &p)) % &p;
        let im = (&a.0 * &b.1 + &a.1 * &b.0) % &p;
        (re, im)
    };
    let c = coordinates(point, 4);
    let x = (c[0].clone(), c[1].clone());
    let y = (c[2].clone(), c[3].clone());

    let lhs = mul(&y, &y);
    let x3 = mul(&mul(&x, &x), &x);
    let rhs = (
        (x3.0 + BigUint::from(2 * B)) % &p,
        (x3.1 + BigUint::from(B)) % &p,
    );
    lhs == rhs
}

/// -P: (x, p - y)
fn negate_g1(point: &ByteBuffer) -> ByteBuffer {
    let p = params().modulus().clone();
    let c = coordinates(point, 2);
    let y = ByteBuffer::from_uint(&(&p - &c[1]), 48).unwrap();
    point.slice(0, 48).unwrap().concat(&y)
}

#[test]
fn reference_points_lie_on_the_curve() {
    for point in [g1().as_bytes(), &G1_DOUBLE[..], &G1_TRIPLE[..]] {
        assert!(on_g1(point));
    }
    for point in [g2().as_bytes(), &G2_DOUBLE[..], &G2_TRIPLE[..]] {
        assert!(on_g2(point));
    }
    assert!(on_g1(&negate_g1(&g1())));
}

#[test]
fn opdata_header_round_trips() {
    let encoded = OpData::encode(&params()).unwrap();
    assert_eq!(encoded.len(), 374);
    assert!(opdata::lengths_consistent(encoded.as_buffer()));
    assert_eq!(opdata::decode(encoded.as_buffer()).unwrap(), params());

    let header = opdata::parse_header(encoded.as_buffer()).unwrap();
    assert_eq!(header.family, BLS12_384_M.family);
    assert_eq!(header.twist, BLS12_384_M.twist);
    assert_eq!(header.byte_len(), 374);
}

#[test]
fn g1_add_then_compare() {
    let input = inputs::g1_add(&params(), &g1(), &ByteBuffer::from(G1_DOUBLE)).unwrap();
    assert!(inputs::input_length_valid(OperationKind::G1Add, input.as_buffer()));

    let engine_output = ByteBuffer::from(G1_TRIPLE);
    assert!(check_result(&input, &engine_output, &ByteBuffer::from(G1_TRIPLE)));
    assert!(!check_result(&input, &engine_output, &ByteBuffer::from(G1_DOUBLE)));
}

#[test]
fn g2_mul_then_compare() {
    let input = inputs::g2_mul(&params(), &g2(), &scalar(3)).unwrap();
    assert_eq!(input.len(), 374 + 192 + 33);
    assert_eq!(&input.operands()[192..], scalar(3).as_bytes());

    let engine_output = ByteBuffer::from(G2_TRIPLE);
    assert!(check_result(&input, &engine_output, &ByteBuffer::from(G2_TRIPLE)));
    // A G1-sized result is never accepted for a G2 operation
    assert!(!result_matches(
        OperationKind::G2Mul,
        &input.layout(),
        &ByteBuffer::from(G1_TRIPLE),
        &ByteBuffer::from(G1_TRIPLE)
    ));
}

#[test]
fn multiexp_inputs() {
    // 1·G + 1·2G == 3G
    let pairs = vec![
        (g1(), scalar(1)),
        (ByteBuffer::from(G1_DOUBLE), scalar(1)),
    ];
    let input = inputs::g1_multiexp(&params(), &pairs, Some(2)).unwrap();
    assert_eq!(input.operands()[0], 2);
    assert_eq!(input.len(), 374 + 1 + 2 * (96 + 33));
    assert!(check_result(
        &input,
        &ByteBuffer::from(G1_TRIPLE),
        &ByteBuffer::from(G1_TRIPLE)
    ));

    let pairs = vec![(g2(), scalar(2)), (ByteBuffer::from(G2_DOUBLE), scalar(0))];
    let input = inputs::g2_multiexp(&params(), &pairs, None).unwrap();
    assert!(inputs::input_length_valid(OperationKind::G2MultiExp, input.as_buffer()));
    assert!(!inputs::input_length_valid(OperationKind::G1MultiExp, input.as_buffer()));
}

#[test]
fn pairing_check_input() {
    // e(G1, G2) * e(-G1, G2) == 1
    let pairs = vec![(g1(), g2()), (negate_g1(&g1()), g2())];
    let input = inputs::pairing(&params(), &pairs, Some(2)).unwrap();
    assert_eq!(input.len(), 374 + 1 + 2 * 288);
    assert!(inputs::input_length_valid(OperationKind::Pairing, input.as_buffer()));

    let engine_output = ByteBuffer::from([0x01]);
    assert!(check_result(&input, &engine_output, &ByteBuffer::from([0x01])));
    assert_eq!(pairing_result(&engine_output), Some(true));
}

#[test]
fn foreign_input_is_screened() {
    let input = inputs::g1_add(&params(), &g1(), &g1()).unwrap();
    let bytes = input.as_buffer().clone();

    assert!(OperationInput::from_bytes(OperationKind::G1Add, bytes.clone()).is_ok());

    let mut corrupted = bytes.into_vec();
    corrupted[1] = 47;
    assert!(!inputs::input_length_valid(OperationKind::G1Add, &corrupted));
    assert!(OperationInput::from_bytes(OperationKind::G1Add, corrupted.into()).is_err());
}
