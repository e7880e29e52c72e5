//! Hash primitives (§4.2) and the varint encoding used throughout the wire
//! format (§4.6, §6 Glossary).
//!
//! Keccak-256 here is the *original* Keccak padding (0x01), not the
//! NIST SHA3-256 finalization (0x06) — `sha3::Keccak256` is exactly that
//! primitive, which is why the teacher reaches for the same crate in
//! `wallet_state.rs` (`compute_keys_checksum`, `get_private_view_key`)
//! rather than `sha3::Sha3_256`.

use sha3::{Digest, Keccak256};

/// Keccak-256 of `data`, original Keccak padding.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    buf
}

/// Encode `value` as Monero's unsigned varint (LEB128 shape): 7 bits per
/// byte, little-endian, continuation bit set on all but the last byte.
pub fn varint_encode(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
    out
}

/// Decode a Monero unsigned varint from the front of `data`, returning the
/// value and the number of bytes consumed.
pub fn varint_decode(data: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    for (i, &byte) in data.iter().enumerate() {
        if shift >= 64 {
            return None;
        }
        value |= ((byte & 0x7f) as u64) << shift;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
        shift += 7;
    }
    None
}
