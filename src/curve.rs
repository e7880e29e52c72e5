//! Constant-time Ed25519 scalar and group operations (§4.1).
//!
//! A thin, explicit-input layer over `curve25519-dalek` — the same curve
//! dependency the teacher already uses directly in `wallet_state.rs`
//! (`Scalar::from_bytes_mod_order`, `ED25519_BASEPOINT_TABLE`). No custom
//! field arithmetic is written here: constant-time behavior on secret
//! inputs comes from curve25519-dalek's own scalar/point operations.

use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;

use crate::error::CurveError;
use crate::hash::keccak256;

/// Interpret `bytes` little-endian and reduce modulo the group order ℓ.
/// Scalar reduction never fails (§4.1).
pub fn reduce32(bytes: &[u8; 32]) -> Scalar {
    Scalar::from_bytes_mod_order(*bytes)
}

/// Wide reduction of a 64-byte value modulo ℓ, used for hash-to-scalar.
pub fn reduce64(bytes: &[u8; 64]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(bytes)
}

/// `s·G`, the Ed25519 base point multiplication.
pub fn scalar_mult_base(s: &Scalar) -> EdwardsPoint {
    s * &ED25519_BASEPOINT_TABLE
}

/// `s·P`, variable-base scalar multiplication.
pub fn scalar_mult(s: &Scalar, p: &EdwardsPoint) -> EdwardsPoint {
    s * p
}

/// `P + Q`.
pub fn point_add(p: &EdwardsPoint, q: &EdwardsPoint) -> EdwardsPoint {
    p + q
}

/// `P - Q`.
pub fn point_sub(p: &EdwardsPoint, q: &EdwardsPoint) -> EdwardsPoint {
    p - q
}

/// Decode a canonical 32-byte compressed Edwards point, rejecting
/// encodings that do not lie on the curve.
pub fn decompress_point(bytes: &[u8; 32]) -> Result<EdwardsPoint, CurveError> {
    CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(CurveError::InvalidPoint)
}

/// Canonical 32-byte encoding of a point.
pub fn compress_point(point: &EdwardsPoint) -> [u8; 32] {
    point.compress().to_bytes()
}

/// The canonical Monero hash-to-scalar function `Hs`:
/// `reduce64(keccak256(x) ‖ 0^32)` — the 32-byte digest zero-padded to 64
/// bytes then wide-reduced.
pub fn hash_to_scalar(data: &[u8]) -> Scalar {
    let digest = keccak256(data);
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&digest);
    reduce64(&wide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce32_of_zero_is_zero() {
        let s = reduce32(&[0u8; 32]);
        assert_eq!(s, Scalar::ZERO);
    }

    #[test]
    fn scalar_mult_base_of_zero_is_identity() {
        let p = scalar_mult_base(&Scalar::ZERO);
        let identity = point_sub(&scalar_mult_base(&Scalar::ONE), &scalar_mult_base(&Scalar::ONE));
        assert_eq!(compress_point(&p), compress_point(&identity));
    }

    #[test]
    fn point_add_sub_roundtrip() {
        let s = reduce32(&[7u8; 32]);
        let p = scalar_mult_base(&s);
        let q = scalar_mult_base(&reduce32(&[3u8; 32]));
        let sum = point_add(&p, &q);
        let back = point_sub(&sum, &q);
        assert_eq!(compress_point(&back), compress_point(&p));
    }

    #[test]
    fn decompress_rejects_garbage() {
        // All-0xFF is not a valid compressed Edwards point.
        let bytes = [0xffu8; 32];
        assert!(decompress_point(&bytes).is_err());
    }

    #[test]
    fn hash_to_scalar_is_deterministic() {
        let a = hash_to_scalar(b"SubAddr");
        let b = hash_to_scalar(b"SubAddr");
        assert_eq!(a, b);
        let c = hash_to_scalar(b"SubAddr ");
        assert_ne!(a, c);
    }
}
