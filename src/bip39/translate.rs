//! Translating a mnemonic between word lists.
//!
//! Word `i` of one list stands for the same 11 bits as word `i` of any other
//! list, so translation is parse, verify and re-render.

use super::wordlist::Language;
use super::{codec, serializer};
use crate::Result;

/// Translate a valid mnemonic from one language into another.
pub fn translate(phrase: &str, from: Language, to: Language) -> Result<String> {
    let indices = serializer::parse(phrase, from.word_list())?;
    codec::decode(&indices)?;
    Ok(serializer::render(&indices, to.word_list()))
}

/// Render a valid mnemonic in `from` with the English list.
pub fn to_english(phrase: &str, from: Language) -> Result<String> {
    translate(phrase, from, Language::English)
}

/// Render a valid English mnemonic in `to`.
pub fn from_english(phrase: &str, to: Language) -> Result<String> {
    translate(phrase, Language::English, to)
}
