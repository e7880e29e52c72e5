//! Output scanner (§4.6): decides which transaction outputs belong to the
//! wallet, and at which subaddress, using the view secret and a
//! precomputed subaddress table.
//!
//! Grounded on `monero-oxide`'s `InternalScanner` (`wallet/src/scan.rs`):
//! same `HashMap<CompressedPoint, SubaddressIndex>` table shape, same
//! primary-key/additional-key retry order, same view-tag fast path ahead
//! of the full `Hs` derivation.

use std::collections::HashMap;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;

use crate::curve::{compress_point, hash_to_scalar, point_sub, scalar_mult, scalar_mult_base};
use crate::hash::{keccak256, varint_encode};
use crate::keys::{PublicKey, SubaddressIndex};
use crate::types::{OwnedOutput, TxData, TxOutput};

/// Precomputed map from a subaddress's public spend key to its index,
/// built once at wallet open (§4.6, §5 "Shared resources").
pub struct SubaddressTable {
    entries: HashMap<[u8; 32], SubaddressIndex>,
}

impl SubaddressTable {
    /// Build the table for every `(major, minor)` pair in
    /// `0..major_max` × `0..minor_max`, including the main address `(0,0)`.
    pub fn build(private_view: &Scalar, public_spend: &PublicKey, major_max: u32, minor_max: u32) -> SubaddressTable {
        let mut entries = HashMap::new();
        let big_b = public_spend.decompress().expect("caller-supplied public spend key must be valid");

        entries.insert(*public_spend.as_bytes(), SubaddressIndex::MAIN);

        for major in 0..major_max {
            for minor in 0..minor_max {
                if major == 0 && minor == 0 {
                    continue;
                }
                let index = SubaddressIndex { major, minor };
                let m = crate::keys::subaddress_scalar(private_view, index);
                let d = crate::curve::point_add(&big_b, &scalar_mult_base(&m));
                entries.insert(compress_point(&d), index);
            }
        }

        SubaddressTable { entries }
    }

    pub fn lookup(&self, public_spend: &[u8; 32]) -> Option<SubaddressIndex> {
        self.entries.get(public_spend).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stateless scanner holding the secrets and table needed to classify
/// outputs. Cryptographic operations here never suspend (§5).
pub struct Scanner<'a> {
    private_view: Scalar,
    public_spend: EdwardsPoint,
    table: &'a SubaddressTable,
    /// Spend scalar `b`, present only for a full (non-view-only) wallet.
    /// When present, matched outputs get their key image computed so the
    /// sync engine can later recognize them being spent (§4.7 step 6).
    private_spend: Option<Scalar>,
}

impl<'a> Scanner<'a> {
    pub fn new(
        private_view: Scalar,
        public_spend: EdwardsPoint,
        table: &'a SubaddressTable,
        private_spend: Option<Scalar>,
    ) -> Scanner<'a> {
        Scanner {
            private_view,
            public_spend,
            table,
            private_spend,
        }
    }

    /// Scan every output of `tx`, returning the outputs that belong to this
    /// wallet. Tries the primary `tx_pubkey` before `additional_pubkeys[o]`
    /// per output, preferring the primary match if both succeed (§4.6
    /// "Ordering").
    pub fn scan_transaction(&self, tx: &TxData, block_height: u64, block_timestamp: u64) -> Vec<OwnedOutput> {
        let mut owned = Vec::new();

        for (index, output) in tx.outputs.iter().enumerate() {
            let candidates = [
                tx.tx_pubkey,
                tx.additional_pubkeys.get(index).copied(),
            ];

            let mut matched = None;
            for candidate in candidates.into_iter().flatten() {
                if let Some(result) = self.try_match_output(&candidate, index as u64, output) {
                    matched = Some(result);
                    break;
                }
            }

            if let Some((subaddress_index, s)) = matched {
                let key_image = self.private_spend.map(|b| {
                    let one_time_secret = if subaddress_index.is_main() {
                        s + b
                    } else {
                        let m = crate::keys::subaddress_scalar(&self.private_view, subaddress_index);
                        s + b + m
                    };
                    crate::keys::key_image(&one_time_secret, &output.public_key)
                });

                owned.push(OwnedOutput {
                    tx_hash: tx.tx_hash,
                    output_index: index as u32,
                    global_index: output.global_index,
                    amount: None,
                    public_key: output.public_key,
                    block_height,
                    timestamp: block_timestamp,
                    subaddress_index,
                    spent: false,
                    key_image,
                });
            }
        }

        owned
    }

    /// Attempt to match a single output against one candidate tx/additional
    /// public key, returning the subaddress index on success (§4.6 steps
    /// 1-7).
    fn try_match_output(&self, r: &[u8; 32], output_index: u64, output: &TxOutput) -> Option<(SubaddressIndex, Scalar)> {
        let r_point = crate::curve::decompress_point(r).ok()?;
        let d = scalar_mult(&self.private_view, &r_point);
        let d_compressed = compress_point(&d);

        if let Some(expected_tag) = output.view_tag {
            let mut buf = Vec::with_capacity(8 + 32 + 10);
            buf.extend_from_slice(b"view_tag");
            buf.extend_from_slice(&d_compressed);
            buf.extend_from_slice(&varint_encode(output_index));
            let actual_tag = keccak256(&buf)[0];
            if actual_tag != expected_tag {
                return None;
            }
        }

        let mut hs_input = Vec::with_capacity(32 + 10);
        hs_input.extend_from_slice(&d_compressed);
        hs_input.extend_from_slice(&varint_encode(output_index));
        let s = hash_to_scalar(&hs_input);

        let p_derived = crate::curve::point_add(&scalar_mult_base(&s), &self.public_spend);
        if compress_point(&p_derived) == output.public_key {
            return Some((SubaddressIndex::MAIN, s));
        }

        let p_out = crate::curve::decompress_point(&output.public_key).ok()?;
        let delta = point_sub(&p_out, &scalar_mult_base(&s));
        self.table.lookup(&compress_point(&delta)).map(|idx| (idx, s))
    }
}
