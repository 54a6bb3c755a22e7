//! Entropy ↔ word-index transcoding with the BIP39 checksum.
//!
//! The entropy bit string is extended with the first `ENT / 32` bits of
//! `SHA-256(entropy)` and cut into 11-bit big-endian groups, one per word.

use super::wordlist::WORDLIST_SIZE;
use crate::{MnemonicError, Result};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Number of bits addressed by a single word.
pub const BITS_PER_WORD: usize = 11;

const INDEX_MASK: u32 = 0x7FF;

/// The five mnemonic sizes BIP39 allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordCount {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    pub fn from_word_count(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.word_count() == words)
    }

    pub fn from_entropy_bits(bits: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.entropy_bits() == bits)
    }

    pub fn word_count(&self) -> usize {
        match self {
            WordCount::Words12 => 12,
            WordCount::Words15 => 15,
            WordCount::Words18 => 18,
            WordCount::Words21 => 21,
            WordCount::Words24 => 24,
        }
    }

    pub fn entropy_bits(&self) -> usize {
        self.word_count() * BITS_PER_WORD * 32 / 33
    }

    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bits() / 8
    }

    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }
}

/// Encode entropy into its word indices.
///
/// Fails with [`MnemonicError::InvalidEntropyLength`] unless the entropy is
/// 16, 20, 24, 28 or 32 bytes long.
pub fn encode(entropy: &[u8]) -> Result<Vec<u16>> {
    let entropy_bits = entropy.len() * 8;
    let word_count = WordCount::from_entropy_bits(entropy_bits)
        .ok_or(MnemonicError::InvalidEntropyLength(entropy_bits))?;

    let checksum_bits = word_count.checksum_bits();
    let checksum = checksum_of(entropy, checksum_bits);

    let mut indices = Vec::with_capacity(word_count.word_count());
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0;

    let bytes = entropy.iter().map(|&byte| (u32::from(byte), 8usize));
    let tail = std::iter::once((u32::from(checksum), checksum_bits));

    for (chunk, width) in bytes.chain(tail) {
        bit_buffer = (bit_buffer << width) | chunk;
        bits_in_buffer += width;

        while bits_in_buffer >= BITS_PER_WORD {
            bits_in_buffer -= BITS_PER_WORD;
            indices.push(((bit_buffer >> bits_in_buffer) & INDEX_MASK) as u16);
            bit_buffer &= (1u32 << bits_in_buffer) - 1;
        }
    }

    debug_assert_eq!(bits_in_buffer, 0);
    log::debug!(
        "Encoded {} bits of entropy into {} words",
        entropy_bits,
        indices.len()
    );
    Ok(indices)
}

/// Decode word indices back into entropy, verifying the checksum.
///
/// Fails with [`MnemonicError::InvalidLength`] when the sequence is not 12,
/// 15, 18, 21 or 24 long, [`MnemonicError::InvalidIndex`] for an index past
/// the end of a word list and [`MnemonicError::ChecksumMismatch`] when the
/// embedded checksum does not match the recovered entropy.
pub fn decode(indices: &[u16]) -> Result<Vec<u8>> {
    let (entropy, _) = unpack_verified(indices)?;
    Ok(entropy)
}

/// Decode word indices into the full checksummed bit string.
///
/// The result is the entropy followed by its checksum bits, read as one
/// big-endian integer and left-padded with zero bits to `entropy_len + 1`
/// bytes. The checksum is verified exactly as in [`decode`].
pub fn checksummed_bytes(indices: &[u16]) -> Result<Vec<u8>> {
    let (entropy, word_count) = unpack_verified(indices)?;

    let total_bits = word_count.word_count() * BITS_PER_WORD;
    let mut output = vec![0u8; entropy.len() + 1];
    let padding = output.len() * 8 - total_bits;

    for (position, &index) in indices.iter().enumerate() {
        for bit in 0..BITS_PER_WORD {
            if (index >> (BITS_PER_WORD - 1 - bit)) & 1 == 1 {
                let offset = padding + position * BITS_PER_WORD + bit;
                output[offset / 8] |= 0x80u8 >> (offset % 8);
            }
        }
    }

    Ok(output)
}

/// Checksum bits a given entropy must carry, right-aligned in a byte.
pub fn checksum_of(entropy: &[u8], checksum_bits: usize) -> u8 {
    let hash = Sha256::digest(entropy);
    hash[0] >> (8 - checksum_bits)
}

fn unpack_verified(indices: &[u16]) -> Result<(Vec<u8>, WordCount)> {
    let word_count = WordCount::from_word_count(indices.len())
        .ok_or(MnemonicError::InvalidLength(indices.len()))?;

    if let Some(&bad) = indices.iter().find(|&&i| usize::from(i) >= WORDLIST_SIZE) {
        return Err(MnemonicError::InvalidIndex(bad));
    }

    let (entropy, provided_checksum) = unpack(indices, word_count);
    let expected_checksum = checksum_of(&entropy, word_count.checksum_bits());

    if !bool::from(provided_checksum.ct_eq(&expected_checksum)) {
        log::debug!("Checksum mismatch for {}-word sequence", indices.len());
        return Err(MnemonicError::ChecksumMismatch);
    }

    Ok((entropy, word_count))
}

/// Split the concatenated bit string into entropy bytes and checksum bits.
fn unpack(indices: &[u16], word_count: WordCount) -> (Vec<u8>, u8) {
    let entropy_bytes = word_count.entropy_bytes();
    let mut entropy = Vec::with_capacity(entropy_bytes);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0;

    for &index in indices {
        bit_buffer = (bit_buffer << BITS_PER_WORD) | u32::from(index);
        bits_in_buffer += BITS_PER_WORD;

        while bits_in_buffer >= 8 && entropy.len() < entropy_bytes {
            bits_in_buffer -= 8;
            entropy.push((bit_buffer >> bits_in_buffer) as u8);
            bit_buffer &= (1u32 << bits_in_buffer) - 1;
        }
    }

    debug_assert_eq!(bits_in_buffer, word_count.checksum_bits());
    (entropy, bit_buffer as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_table() {
        let expected = [(12, 128, 4), (15, 160, 5), (18, 192, 6), (21, 224, 7), (24, 256, 8)];
        for (words, entropy_bits, checksum_bits) in expected {
            let wc = WordCount::from_word_count(words).unwrap();
            assert_eq!(wc.entropy_bits(), entropy_bits);
            assert_eq!(wc.checksum_bits(), checksum_bits);
            assert_eq!(WordCount::from_entropy_bits(entropy_bits), Some(wc));
            assert_eq!((entropy_bits + checksum_bits) % BITS_PER_WORD, 0);
        }
        assert_eq!(WordCount::from_word_count(13), None);
        assert_eq!(WordCount::from_entropy_bits(120), None);
    }

    #[test]
    fn test_encode_zero_entropy() {
        let indices = encode(&[0u8; 16]).unwrap();
        assert_eq!(indices, vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_encode_max_entropy() {
        let indices = encode(&[0xFF; 16]).unwrap();
        let mut expected = vec![2047u16; 11];
        expected.push(2037);
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_encode_pattern_entropy() {
        let indices = encode(&[0x7F; 16]).unwrap();
        assert_eq!(
            indices,
            vec![1019, 2015, 1790, 2039, 1983, 1533, 2031, 1919, 1019, 2015, 1790, 2040]
        );
    }

    #[test]
    fn test_encode_length_boundaries() {
        assert!(matches!(encode(&[0u8; 15]), Err(MnemonicError::InvalidEntropyLength(120))));
        assert!(matches!(encode(&[0u8; 33]), Err(MnemonicError::InvalidEntropyLength(264))));
        assert!(matches!(encode(&[]), Err(MnemonicError::InvalidEntropyLength(0))));
        assert_eq!(encode(&[0u8; 16]).unwrap().len(), 12);
        assert_eq!(encode(&[0u8; 32]).unwrap().len(), 24);
    }

    #[test]
    fn test_decode_roundtrip_all_sizes() {
        for len in [16, 20, 24, 28, 32] {
            let entropy: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(37) ^ 0xA5).collect();
            let indices = encode(&entropy).unwrap();
            assert_eq!(indices.len(), len * 3 / 4);
            assert_eq!(decode(&indices).unwrap(), entropy);
        }
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert!(matches!(decode(&[0u16; 11]), Err(MnemonicError::InvalidLength(11))));
        assert!(matches!(decode(&[0u16; 13]), Err(MnemonicError::InvalidLength(13))));
        assert!(matches!(decode(&[]), Err(MnemonicError::InvalidLength(0))));
    }

    #[test]
    fn test_decode_rejects_out_of_range_index() {
        let mut indices = encode(&[0u8; 16]).unwrap();
        indices[4] = 2048;
        assert!(matches!(decode(&indices), Err(MnemonicError::InvalidIndex(2048))));
    }

    #[test]
    fn test_decode_detects_checksum_mismatch() {
        // "abandon" x 12: entropy of zeros with checksum bits 0000 instead of 0011.
        assert!(matches!(decode(&[0u16; 12]), Err(MnemonicError::ChecksumMismatch)));
    }

    #[test]
    fn test_checksummed_bytes() {
        let indices = encode(&[0u8; 16]).unwrap();
        assert_eq!(
            hex::encode(checksummed_bytes(&indices).unwrap()),
            "0000000000000000000000000000000003"
        );

        let indices = encode(&[0xFF; 16]).unwrap();
        assert_eq!(
            hex::encode(checksummed_bytes(&indices).unwrap()),
            "0ffffffffffffffffffffffffffffffff5"
        );

        let indices = encode(&[0x7F; 16]).unwrap();
        assert_eq!(
            hex::encode(checksummed_bytes(&indices).unwrap()),
            "07f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f8"
        );
    }

    #[test]
    fn test_checksummed_bytes_verifies_checksum() {
        assert!(matches!(checksummed_bytes(&[0u16; 12]), Err(MnemonicError::ChecksumMismatch)));
    }

    #[test]
    fn test_zero_leading_entropy_roundtrip() {
        for hex_entropy in [
            "00a84c51041d49acca66e6160c1fa999",
            "0019d5871c7b81fd83d474ef1c1e1dae",
            "0002f90aaf7a8327698f0031b6317c36",
            "000aeed1a9edcbb4bc88f610d3ce84eb",
        ] {
            let entropy = hex::decode(hex_entropy).unwrap();
            let indices = encode(&entropy).unwrap();
            assert_eq!(decode(&indices).unwrap(), entropy);
        }
    }
}
