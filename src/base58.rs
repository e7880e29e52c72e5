//! Monero-flavored Base58 codec (§4.3).
//!
//! Written from scratch against spec.md's exact byte layout — this is a
//! named CORE module, not a wrapped third-party crate. The 8-byte-block /
//! 11-char-block shape and the tail-length table below are the load-bearing
//! details; they differ from vanilla Bitcoin-style Base58 (which has no
//! fixed block structure), which is why a generic `base58` crate is not a
//! substitute here.

use crate::error::CodecError;
use crate::hash::keccak256;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const FULL_BLOCK_SIZE: usize = 8;
const FULL_ENCODED_BLOCK_SIZE: usize = 11;
/// Indexed by the number of bytes in a (possibly partial) input block.
const ENCODED_BLOCK_SIZES: [usize; 9] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

fn decode_char(c: u8) -> Option<u8> {
    ALPHABET.iter().position(|&a| a == c).map(|p| p as u8)
}

fn encode_block(input: &[u8], out: &mut Vec<u8>) {
    debug_assert!(input.len() <= FULL_BLOCK_SIZE);
    let encoded_len = ENCODED_BLOCK_SIZES[input.len()];

    let mut num = [0u8; FULL_BLOCK_SIZE];
    num[FULL_BLOCK_SIZE - input.len()..].copy_from_slice(input);
    let mut value = u64::from_be_bytes(num);

    let mut digits = [0u8; FULL_ENCODED_BLOCK_SIZE];
    for slot in digits.iter_mut().rev().take(encoded_len) {
        *slot = ALPHABET[(value % 58) as usize];
        value /= 58;
    }
    out.extend_from_slice(&digits[FULL_ENCODED_BLOCK_SIZE - encoded_len..]);
}

fn decode_block(input: &[u8], out: &mut Vec<u8>) -> Result<(), CodecError> {
    let encoded_len = input.len();
    let full_size = ENCODED_BLOCK_SIZES
        .iter()
        .position(|&sz| sz == encoded_len)
        .ok_or(CodecError::InvalidLength)?;

    let mut value: u128 = 0;
    for &c in input {
        let digit = decode_char(c).ok_or(CodecError::InvalidCharacter(c as char))?;
        value = value * 58 + digit as u128;
    }
    // Overflow of a block's value beyond its byte width indicates garbage
    // input (the encoding is not unique above the block's 8-byte range).
    if value >> (full_size * 8) != 0 {
        return Err(CodecError::InvalidLength);
    }
    let full_bytes = value.to_be_bytes();
    out.extend_from_slice(&full_bytes[16 - full_size..]);
    Ok(())
}

/// Plain (unchecksummed) Base58 encode.
pub fn encode(data: &[u8]) -> String {
    let mut out = Vec::with_capacity((data.len() / FULL_BLOCK_SIZE + 1) * FULL_ENCODED_BLOCK_SIZE);
    let mut chunks = data.chunks_exact(FULL_BLOCK_SIZE);
    for chunk in &mut chunks {
        encode_block(chunk, &mut out);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() {
        encode_block(tail, &mut out);
    }
    String::from_utf8(out).expect("alphabet is ASCII")
}

/// Plain (unchecksummed) Base58 decode.
pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity((bytes.len() / FULL_ENCODED_BLOCK_SIZE + 1) * FULL_BLOCK_SIZE);
    let mut chunks = bytes.chunks_exact(FULL_ENCODED_BLOCK_SIZE);
    for chunk in &mut chunks {
        decode_block(chunk, &mut out)?;
    }
    let tail = chunks.remainder();
    if !tail.is_empty() {
        decode_block(tail, &mut out)?;
    }
    Ok(out)
}

/// Base58 encode `payload` with a trailing 4-byte Keccak-256 checksum:
/// `Base58Encode(payload ‖ first4(keccak256(payload)))`.
pub fn encode_check(payload: &[u8]) -> String {
    let digest = keccak256(payload);
    let mut buf = Vec::with_capacity(payload.len() + 4);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&digest[..4]);
    encode(&buf)
}

/// Decode a checksummed Base58 string, verifying the trailing 4-byte
/// Keccak-256 checksum and returning the payload without it.
pub fn decode_check(s: &str) -> Result<Vec<u8>, CodecError> {
    let mut full = decode(s)?;
    if full.len() < 4 {
        return Err(CodecError::InvalidLength);
    }
    let checksum_offset = full.len() - 4;
    let payload = &full[..checksum_offset];
    let expected = keccak256(payload);
    if expected[..4] != full[checksum_offset..] {
        return Err(CodecError::InvalidChecksum);
    }
    full.truncate(checksum_offset);
    Ok(full)
}
