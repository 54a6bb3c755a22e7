//! Rendering index sequences as phrases and parsing phrases back.

use super::codec::WordCount;
use super::wordlist::WordList;
use crate::{MnemonicError, Result};

/// Render word indices as a phrase using `word_list`.
///
/// `indices` must already be in range, as produced by [`parse`] or
/// [`super::codec::encode`]. An index of 2048 or more is a caller bug:
/// debug builds panic on it and release builds render it as `"?"`, so the
/// phrase never loses a word.
pub fn render(indices: &[u16], word_list: &WordList) -> String {
    debug_assert!(
        indices.iter().all(|&index| usize::from(index) < word_list.len()),
        "word index out of range"
    );
    indices
        .iter()
        .map(|&index| word_list.word(index).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(word_list.separator())
}

/// Split a phrase into tokens and resolve each one against `word_list`.
///
/// Tokens are separated by any run of Unicode whitespace. Fails with
/// [`MnemonicError::InvalidWordCount`] unless there are 12, 15, 18, 21 or 24
/// tokens, and with [`MnemonicError::UnknownWord`] for the first token that
/// is not in the list.
pub fn parse(phrase: &str, word_list: &WordList) -> Result<Vec<u16>> {
    let tokens = tokenize(phrase);

    if WordCount::from_word_count(tokens.len()).is_none() {
        return Err(MnemonicError::InvalidWordCount(tokens.len()));
    }

    tokens
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            word_list.index_of(token).ok_or_else(|| {
                log::debug!(
                    "Word at position {} not found in {} word list",
                    position,
                    word_list.language()
                );
                MnemonicError::UnknownWord(token.to_string())
            })
        })
        .collect()
}

/// Tokens of a phrase, in order.
pub fn tokenize(phrase: &str) -> Vec<&str> {
    phrase.split_whitespace().collect()
}
