//! 24-word + checksum mnemonic encoding of a 32-byte secret (§4.4).
//!
//! Grounded on the checksum/word-index arithmetic in
//! `salvium-types/src/mnemonic.rs` and `monumexyz-libmonero/src/keys.rs`;
//! the word list itself (`wordlist_english.rs`) is the only list shipped,
//! per spec.md §1 (other-language word lists are out of scope).

use crate::error::MnemonicError;
use crate::wordlist_english::{WORDS, WORD_COUNT};

const GROUP_WORDS: usize = 3;
const NUM_GROUPS: usize = 8;
const TOTAL_WORDS: usize = NUM_GROUPS * GROUP_WORDS + 1; // 25, including checksum word
const PREFIX_LEN: usize = 3;

/// Encode 32 bytes of entropy into a 25-word mnemonic phrase (24 data words
/// + 1 checksum word).
pub fn entropy_to_mnemonic(entropy: &[u8; 32]) -> Result<String, MnemonicError> {
    let mut words: Vec<&'static str> = Vec::with_capacity(TOTAL_WORDS);

    for chunk in entropy.chunks_exact(4) {
        let w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as u64;
        let n = WORD_COUNT as u64;
        let w1 = w % n;
        let w2 = (w / n + w1) % n;
        let w3 = (w / n / n + w / n + w1) % n;
        words.push(WORDS[w1 as usize]);
        words.push(WORDS[w2 as usize]);
        words.push(WORDS[w3 as usize]);
    }

    let checksum_index = checksum_word_index(&words);
    words.push(words[checksum_index]);

    Ok(words.join(" "))
}

/// Decode a 25-word mnemonic phrase back into 32 bytes of entropy,
/// verifying the checksum word.
pub fn mnemonic_to_entropy(phrase: &str) -> Result<[u8; 32], MnemonicError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() != TOTAL_WORDS {
        return Err(MnemonicError::WrongWordCount(words.len()));
    }

    let data_words = &words[..NUM_GROUPS * GROUP_WORDS];
    let checksum_index = checksum_word_index(data_words);
    if words[TOTAL_WORDS - 1] != data_words[checksum_index] {
        return Err(MnemonicError::ChecksumMismatch);
    }

    let indices: Vec<u64> = data_words
        .iter()
        .map(|w| {
            WORDS
                .iter()
                .position(|candidate| candidate == w)
                .map(|p| p as u64)
                .ok_or_else(|| MnemonicError::UnknownWord((*w).to_string()))
        })
        .collect::<Result<_, _>>()?;

    let mut entropy = [0u8; 32];
    let n = WORD_COUNT as u64;
    for (group, quad) in entropy.chunks_exact_mut(4).enumerate() {
        let i1 = indices[group * 3];
        let i2 = indices[group * 3 + 1];
        let i3 = indices[group * 3 + 2];
        // Inverse of the forward encoding: w1 = w mod n, w2 = (w/n + w1) mod n,
        // w3 = (w/n/n + w/n + w1) mod n. Solve for w/n mod n first, then w mod n^3.
        let w1 = i1;
        let w2 = (n + i2 - i1 % n) % n;
        let w3 = (n + i3 - (w1 + w2) % n) % n;
        let w = w1 + n * (w2 + n * w3);
        quad.copy_from_slice(&(w as u32).to_le_bytes());
    }

    Ok(entropy)
}

/// Checksum word index: `crc32(concat(first 3 chars of each of the 24
/// words)) mod 24`.
fn checksum_word_index(data_words: &[&str]) -> usize {
    debug_assert_eq!(data_words.len(), NUM_GROUPS * GROUP_WORDS);
    let mut prefix = String::new();
    for word in data_words {
        let take = PREFIX_LEN.min(word.len());
        prefix.push_str(&word[..take]);
    }
    let crc = crc32fast::hash(prefix.as_bytes());
    (crc as usize) % (NUM_GROUPS * GROUP_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_zero_entropy() {
        let entropy = [0u8; 32];
        let phrase = entropy_to_mnemonic(&entropy).unwrap();
        let back = mnemonic_to_entropy(&phrase).unwrap();
        assert_eq!(back, entropy);
    }

    #[test]
    fn roundtrip_arbitrary_entropy() {
        let entropy: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));
        let phrase = entropy_to_mnemonic(&entropy).unwrap();
        assert_eq!(phrase.split_whitespace().count(), TOTAL_WORDS);
        let back = mnemonic_to_entropy(&phrase).unwrap();
        assert_eq!(back, entropy);
    }

    #[test]
    fn roundtrip_many_values() {
        for seed in 0u8..50 {
            let entropy: [u8; 32] = core::array::from_fn(|i| seed.wrapping_add(i as u8).wrapping_mul(13));
            let phrase = entropy_to_mnemonic(&entropy).unwrap();
            let back = mnemonic_to_entropy(&phrase).unwrap();
            assert_eq!(back, entropy, "roundtrip failed for seed {}", seed);
        }
    }

    #[test]
    fn wrong_word_count_is_rejected() {
        let err = mnemonic_to_entropy("only a few words").unwrap_err();
        assert_eq!(err, MnemonicError::WrongWordCount(4));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let entropy = [1u8; 32];
        let phrase = entropy_to_mnemonic(&entropy).unwrap();
        let mut words: Vec<&str> = phrase.split_whitespace().collect();
        words[0] = "zzznotarealword";
        let corrupted = words.join(" ");
        assert!(matches!(
            mnemonic_to_entropy(&corrupted),
            Err(MnemonicError::UnknownWord(_))
        ));
    }

    #[test]
    fn corrupted_checksum_word_is_rejected() {
        let entropy = [9u8; 32];
        let phrase = entropy_to_mnemonic(&entropy).unwrap();
        let mut words: Vec<&str> = phrase.split_whitespace().collect();
        let last = words.len() - 1;
        // Swap the checksum word for a different, valid word-list entry.
        words[last] = if WORDS[0] != words[last] { WORDS[0] } else { WORDS[1] };
        let corrupted = words.join(" ");
        assert_eq!(
            mnemonic_to_entropy(&corrupted).unwrap_err(),
            MnemonicError::ChecksumMismatch
        );
    }
}
