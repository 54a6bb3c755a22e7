//! Full mnemonic validation: parse, then decode with checksum verification.

use super::wordlist::WordList;
use super::{codec, serializer};
use crate::Result;

/// Recover the entropy behind `phrase`.
///
/// Surfaces the first failure among [`crate::MnemonicError::InvalidWordCount`],
/// [`crate::MnemonicError::UnknownWord`], [`crate::MnemonicError::InvalidLength`]
/// and [`crate::MnemonicError::ChecksumMismatch`].
pub fn entropy_from_mnemonic(phrase: &str, word_list: &WordList) -> Result<Vec<u8>> {
    let indices = serializer::parse(phrase, word_list)?;
    codec::decode(&indices)
}

/// Whether `phrase` is a valid mnemonic in `word_list`.
pub fn is_valid(phrase: &str, word_list: &WordList) -> bool {
    entropy_from_mnemonic(phrase, word_list).is_ok()
}

/// The checksummed byte form of `phrase`, see [`codec::checksummed_bytes`].
pub fn mnemonic_to_byte_array(phrase: &str, word_list: &WordList) -> Result<Vec<u8>> {
    let indices = serializer::parse(phrase, word_list)?;
    codec::checksummed_bytes(&indices)
}
