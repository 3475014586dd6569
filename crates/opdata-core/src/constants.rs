//! Wire-format constants and the BLS12-384-M parameter set
//!
//! BLS12-384-M is the BLS12 curve with x = -0x1200000002c000000, b = 6 and an
//! M-type sextic twist over Fp2 = Fp[u]/(u^2 + 1) with non-residue 2 + u.
//! G1 and G2 generators are cofactor-cleared points of prime order r.

use hex_literal::hex;

/// Width of every tag and length byte in the header
pub const TAG_LEN: usize = 1;

/// Width of the pair count that prefixes multi-exponentiation and pairing operands
pub const PAIR_COUNT_LEN: usize = 1;

/// Largest pair count a single count byte can declare
pub const MAX_PAIRS: usize = u8::MAX as usize;

/// Largest field or order width a single length byte can declare
pub const MAX_ELEMENT_LEN: usize = u8::MAX as usize;

/// Extension degrees the engine accepts for the G2 field
pub const SUPPORTED_DEGREES: [u8; 6] = [1, 2, 3, 4, 6, 12];

/// Width of the pairing result (a single boolean byte)
pub const PAIRING_RESULT_LEN: usize = 1;

/// Name under which BLS12-384-M is registered
pub const BLS12_384_M_NAME: &str = "BLS12-384-M";

/// Extension degree of the BLS12-384-M G2 field
pub const BLS12_384_M_DEGREE: u8 = 2;

/// Base field modulus p (384 bits)
pub const BLS12_384_M_MODULUS: [u8; 48] = hex!(
    "acfec0009e943001701d7d00f74506804932ca140b0db1f20dd707eb15fbe2f2"
    "99a6aaaaa9ccd554f555555546aaaaab"
);

/// Prime subgroup order r (257 bits)
pub const BLS12_384_M_ORDER: [u8; 33] = hex!(
    "019a100000fa980000396d800005d95ffebc3930ff9cfffffff8700000000000"
    "01"
);

/// G1 generator x
pub const BLS12_384_M_G1_X: [u8; 48] = hex!(
    "0103f98166c2ce86ab717b6ea1ddc85fe5a2a6bebc816e6c09772841975eb6fd"
    "7ee8979b1df3fe80b5f936d720f92dd4"
);

/// G1 generator y
pub const BLS12_384_M_G1_Y: [u8; 48] = hex!(
    "a87c1eeb0e45dab2d2795d472bfe9d81fd8fa9758f1e06bc7f9b1d224913ac83"
    "eea97527be6598cc69a36d567d74b66a"
);

/// G2 generator x.c0
pub const BLS12_384_M_G2_X_C0: [u8; 48] = hex!(
    "30728db95d66e57ae84fe6578f0acd59f8be5fa0182e43fac48d88d4c5183b9e"
    "825761fc0980497602ae5260f155fcab"
);

/// G2 generator x.c1
pub const BLS12_384_M_G2_X_C1: [u8; 48] = hex!(
    "21eb257a557ec359397d1a2cff05c027c4cb7ed83ad441070d99b7a53a4acbd9"
    "52f7e6ca08f22efa9cee1cf9c3e77f27"
);

/// G2 generator y.c0
pub const BLS12_384_M_G2_Y_C0: [u8; 48] = hex!(
    "5c980a0b5af5f70b935250a2c70174b10739e5c8ae66e27725ef2a07e4343ecb"
    "a674e2a9453b9f757c9bc0d3a20537e4"
);

/// G2 generator y.c1
pub const BLS12_384_M_G2_Y_C1: [u8; 48] = hex!(
    "35e5d7cbdc745a843e3d675378ff936549ca28d47815d5bb69f7e699ac066412"
    "e60f0ecfda4fd2f2c31dc81054327a44"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_widths() {
        // No leading zero byte: the array width is ceil(bits / 8)
        assert_ne!(BLS12_384_M_MODULUS[0], 0);
        assert_ne!(BLS12_384_M_ORDER[0], 0);
        assert_eq!(BLS12_384_M_MODULUS.len(), 48);
        assert_eq!(BLS12_384_M_ORDER.len(), 33);
    }

    #[test]
    fn test_modulus_is_3_mod_4() {
        // Fp2 = Fp[u]/(u^2 + 1) needs -1 to be a non-residue
        assert_eq!(BLS12_384_M_MODULUS[47] & 0x03, 0x03);
    }

    #[test]
    fn test_supported_degrees_sorted() {
        assert!(SUPPORTED_DEGREES.windows(2).all(|w| w[0] < w[1]));
        assert!(SUPPORTED_DEGREES.contains(&BLS12_384_M_DEGREE));
    }
}
