//! Key hierarchy and subaddress derivation (§4.5).
//!
//! Grounded on `monumexyz-libmonero/src/keys.rs` (private/public key
//! derivation, double Keccak-256 for the view key) and the subaddress
//! scheme detailed in spec.md §4.5, which matches the derivation
//! `monero-oxide`'s scanner (`scan.rs`) consumes on the read side.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::curve::{compress_point, decompress_point, hash_to_scalar, point_add, reduce32, scalar_mult, scalar_mult_base};
use crate::error::CurveError;
use crate::hash::keccak256;
use crate::hash_to_point::hash_to_point;
use crate::types::KeyImage;

const SUBADDR_TAG: &[u8; 8] = b"SubAddr\0";

/// A 32-byte private scalar, zeroized on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct PrivateKey(pub(crate) [u8; 32]);

impl PrivateKey {
    /// Wrap a raw 32-byte secret (e.g. a view key recovered from a wallet
    /// file or export) without deriving it from a seed.
    pub fn from_bytes(bytes: [u8; 32]) -> PrivateKey {
        PrivateKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    fn scalar(&self) -> Scalar {
        reduce32(&self.0)
    }
}

/// A 32-byte public point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn decompress(&self) -> Result<EdwardsPoint, CurveError> {
        decompress_point(&self.0)
    }
}

/// `(major, minor)` subaddress index. `(0, 0)` is the main account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SubaddressIndex {
    pub major: u32,
    pub minor: u32,
}

impl SubaddressIndex {
    pub const MAIN: SubaddressIndex = SubaddressIndex { major: 0, minor: 0 };

    pub fn is_main(&self) -> bool {
        self.major == 0 && self.minor == 0
    }
}

/// The full key hierarchy derived from a 32-byte seed: private/public spend
/// and view keys (§3, §4.5).
pub struct KeyPair {
    pub private_spend: PrivateKey,
    pub private_view: PrivateKey,
    pub public_spend: PublicKey,
    pub public_view: PublicKey,
    /// `false` for [`KeyPair::view_only`]: `private_spend` holds no secret
    /// in that case and must not be read as one (no spend authority, so no
    /// key images can be computed).
    spend_capable: bool,
}

impl KeyPair {
    /// `b = reduce32(seed32)`; `a = reduce32(keccak256(b))`; `B = b·G`;
    /// `A = a·G`. This specific double-derivation (view key from the
    /// *reduced* spend scalar, not the raw seed) is mandatory for
    /// compatibility with the reference wallet.
    pub fn from_seed(seed: &[u8; 32]) -> KeyPair {
        let b = reduce32(seed);
        let b_bytes = b.to_bytes();
        let a = reduce32(&keccak256(&b_bytes));

        let public_spend = compress_point(&scalar_mult_base(&b));
        let public_view = compress_point(&scalar_mult_base(&a));

        KeyPair {
            private_spend: PrivateKey(b_bytes),
            private_view: PrivateKey(a.to_bytes()),
            public_spend: PublicKey(public_spend),
            public_view: PublicKey(public_view),
            spend_capable: true,
        }
    }

    /// Fresh wallet creation: draw a random 32-byte seed from `rng` and
    /// derive the hierarchy from it, per §9 "Ambient randomness" — the
    /// randomness source is an explicit capability the caller supplies
    /// (a system CSPRNG in production, a fixed source in tests) rather
    /// than an implicit global generator.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> KeyPair {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        let keys = KeyPair::from_seed(&seed);
        seed.zeroize();
        keys
    }

    /// [`KeyPair::generate`] seeded from the operating system's CSPRNG, the
    /// same `rand_core::OsRng` the teacher reaches for at seed-generation
    /// time (`wallet_state.rs`'s `Seed::new(&mut OsRng, ...)`).
    pub fn generate_os_random() -> KeyPair {
        KeyPair::generate(&mut rand_core::OsRng)
    }

    /// Construct a view-only hierarchy: no spend scalar is held, and
    /// [`KeyPair::private_spend`] must not be read by callers of a
    /// view-only wallet. Present for API symmetry with
    /// [`KeyPair::from_seed`]; the scanner only ever needs
    /// `private_view`/`public_spend`.
    pub fn view_only(private_view: PrivateKey, public_spend: PublicKey) -> KeyPair {
        let public_view = compress_point(&scalar_mult_base(&private_view.scalar()));
        KeyPair {
            private_spend: PrivateKey([0u8; 32]),
            private_view,
            public_spend,
            public_view: PublicKey(public_view),
            spend_capable: false,
        }
    }

    /// The spend scalar `b`, if this hierarchy was constructed with spend
    /// authority. `None` for [`KeyPair::view_only`] — a view-only wallet can
    /// detect incoming outputs but cannot derive their key images.
    pub fn private_spend_scalar(&self) -> Option<Scalar> {
        self.spend_capable.then(|| self.private_spend.scalar())
    }

    /// Derive the subaddress `(i, j)` public spend/view keys. `(0, 0)`
    /// returns the main account's `(B, A)` unchanged (§4.5).
    pub fn subaddress(&self, index: SubaddressIndex) -> Result<(PublicKey, PublicKey), CurveError> {
        if index.is_main() {
            return Ok((self.public_spend, self.public_view));
        }

        let m = subaddress_scalar(&self.private_view.scalar(), index);
        let big_b = self.public_spend.decompress()?;
        let d = point_add(&big_b, &scalar_mult_base(&m));
        let c = scalar_mult(&self.private_view.scalar(), &d);

        Ok((PublicKey(compress_point(&d)), PublicKey(compress_point(&c))))
    }
}

/// `I = x·Hp(P)`: the key image of an owned output whose one-time private
/// key is `x` and whose target public key is `P` (§3 `KeyImage`). Uniquely
/// identifies the output for double-spend detection independent of which
/// address received it.
pub fn key_image(one_time_secret: &Scalar, output_public_key: &[u8; 32]) -> KeyImage {
    let hp = hash_to_point(output_public_key);
    compress_point(&scalar_mult(one_time_secret, &hp))
}

/// `m = Hs("SubAddr\0" ‖ a ‖ i_le32 ‖ j_le32)`. The tag is the ASCII string
/// followed by a NUL byte (8 bytes total); indices are little-endian u32.
pub fn subaddress_scalar(private_view: &Scalar, index: SubaddressIndex) -> Scalar {
    let mut buf = Vec::with_capacity(8 + 32 + 4 + 4);
    buf.extend_from_slice(SUBADDR_TAG);
    buf.extend_from_slice(&private_view.to_bytes());
    buf.extend_from_slice(&index.major.to_le_bytes());
    buf.extend_from_slice(&index.minor.to_le_bytes());
    hash_to_scalar(&buf)
}

/// A deterministic `RngCore` standing in for a real CSPRNG in tests, so
/// `KeyPair::generate` can be exercised without pulling non-determinism
/// into the test suite.
#[cfg(test)]
struct CountingRng(u64);

#[cfg(test)]
impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
impl CryptoRng for CountingRng {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_seed() -> [u8; 32] {
        let full = hex::decode("b0ef6bd527b9b23b9ceef70dc8b4cd1ee83ca14541964e764ad23f5151204f0f").unwrap();
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&full);
        seed
    }

    #[test]
    fn private_spend_equals_seed_when_already_reduced() {
        let seed = test_seed();
        let keys = KeyPair::from_seed(&seed);
        assert_eq!(keys.private_spend.as_bytes(), &seed);
    }

    #[test]
    fn private_view_is_reduce32_of_keccak256_of_spend() {
        let seed = test_seed();
        let keys = KeyPair::from_seed(&seed);
        let expected = reduce32(&keccak256(&seed));
        assert_eq!(keys.private_view.as_bytes(), &expected.to_bytes());
    }

    #[test]
    fn public_keys_are_32_bytes() {
        let keys = KeyPair::from_seed(&test_seed());
        assert_eq!(keys.public_spend.as_bytes().len(), 32);
        assert_eq!(keys.public_view.as_bytes().len(), 32);
    }

    #[test]
    fn main_subaddress_matches_account_keys() {
        let keys = KeyPair::from_seed(&test_seed());
        let (spend, view) = keys.subaddress(SubaddressIndex::MAIN).unwrap();
        assert_eq!(spend, keys.public_spend);
        assert_eq!(view, keys.public_view);
    }

    #[test]
    fn distinct_subaddress_indices_give_distinct_spend_keys() {
        let keys = KeyPair::from_seed(&test_seed());
        let (d1, _) = keys.subaddress(SubaddressIndex { major: 0, minor: 1 }).unwrap();
        let (d2, _) = keys.subaddress(SubaddressIndex { major: 0, minor: 2 }).unwrap();
        let (d3, _) = keys.subaddress(SubaddressIndex { major: 1, minor: 0 }).unwrap();
        assert_ne!(d1, d2);
        assert_ne!(d1, d3);
        assert_ne!(d2, d3);
    }

    #[test]
    fn generate_draws_seed_from_the_injected_rng() {
        let mut rng_a = CountingRng(1);
        let mut rng_b = CountingRng(1);
        let keys_a = KeyPair::generate(&mut rng_a);
        let keys_b = KeyPair::generate(&mut rng_b);
        // Same RNG state in, same keys out: `generate` derives entirely
        // from the capability it's given, no hidden global state.
        assert_eq!(keys_a.public_spend, keys_b.public_spend);
        assert_eq!(keys_a.public_view, keys_b.public_view);

        let mut rng_c = CountingRng(2);
        let keys_c = KeyPair::generate(&mut rng_c);
        assert_ne!(keys_a.public_spend, keys_c.public_spend);
    }

    #[test]
    fn subaddress_view_key_is_a_times_d() {
        let keys = KeyPair::from_seed(&test_seed());
        let index = SubaddressIndex { major: 2, minor: 5 };
        let (d, c) = keys.subaddress(index).unwrap();
        let expected_c = scalar_mult(&keys.private_view.scalar(), &d.decompress().unwrap());
        assert_eq!(c.as_bytes(), &compress_point(&expected_c));
    }
}
