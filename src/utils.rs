//! Logging and configuration plumbing, plus string-level helpers.

pub mod config;
pub mod logging;

use crate::bip39::{self, Language, Mnemonic};
use crate::Result;

/// Generates a new 24-word mnemonic phrase in `language`.
pub fn generate_mnemonic(language: Language) -> Result<String> {
    let mnemonic = Mnemonic::generate_with_language(256, language)?;
    Ok(mnemonic.phrase().to_string())
}

/// Whether `mnemonic_str` is a valid mnemonic in `language`.
pub fn validate_mnemonic(mnemonic_str: &str, language: Language) -> bool {
    bip39::is_valid(mnemonic_str, language.word_list())
}
