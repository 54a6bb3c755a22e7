//! BIP39 Mnemonic code for generating deterministic keys.
//!
//! The building blocks live in submodules and can be used directly:
//!
//! - [`codec`]: entropy ↔ word indices, checksum verification
//! - [`serializer`]: word indices ↔ phrase for a [`WordList`]
//! - [`seed`]: PBKDF2 stretching of a phrase into a 64-byte [`Seed`]
//! - [`validator`]: parse + decode composed, plus the boolean convenience check
//! - [`corrector`]: single-word checksum repair
//! - [`entropy`]: secure entropy generation
//! - [`translate`]: re-rendering a mnemonic in another language
//!
//! [`Mnemonic`] ties them together as a validated, language-tagged value.

pub mod codec;
pub mod corrector;
pub mod entropy;
pub mod seed;
pub mod serializer;
pub mod translate;
pub mod validator;
pub mod wordlist;

pub use self::codec::WordCount;
pub use self::corrector::{CorrectionScope, Corrector};
pub use self::seed::Seed;
pub use self::validator::{entropy_from_mnemonic, is_valid};
pub use self::wordlist::{Language, WordList};

use crate::{MnemonicError, Result};
use std::fmt;
use std::str::FromStr;

/// Represents a BIP39 mnemonic phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    indices: Vec<u16>,
    language: Language,
    phrase: String,
}

impl Mnemonic {
    /// Generate a new mnemonic with the specified entropy length
    pub fn generate(entropy_bits: usize) -> Result<Self> {
        Self::generate_with_language(entropy_bits, Language::English)
    }

    /// Generate a new mnemonic with specified entropy length and language
    pub fn generate_with_language(entropy_bits: usize, language: Language) -> Result<Self> {
        let entropy = entropy::new_entropy(entropy_bits)?;
        Self::from_entropy_with_language(&entropy, language)
    }

    /// Create a mnemonic from entropy bytes
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        Self::from_entropy_with_language(entropy, Language::English)
    }

    /// Create a mnemonic from entropy bytes with specified language
    pub fn from_entropy_with_language(entropy: &[u8], language: Language) -> Result<Self> {
        let indices = codec::encode(entropy)?;
        Ok(Self::from_indices(indices, language))
    }

    /// Parse and fully validate a mnemonic with specified language
    pub fn from_str_with_language(mnemonic_str: &str, language: Language) -> Result<Self> {
        let indices = serializer::parse(mnemonic_str, language.word_list())?;
        codec::decode(&indices)?;
        Ok(Self::from_indices(indices, language))
    }

    fn from_indices(indices: Vec<u16>, language: Language) -> Self {
        let phrase = serializer::render(&indices, language.word_list());
        Mnemonic { indices, language, phrase }
    }

    /// The phrase with words joined by the language separator
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Iterate over the words of the phrase
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.phrase.split(self.language.word_list().separator())
    }

    /// The 11-bit word indices
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Get the language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of words (12, 15, 18, 21 or 24)
    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the entropy that generated this mnemonic
    pub fn to_entropy(&self) -> Result<Vec<u8>> {
        codec::decode(&self.indices)
    }

    /// Convert mnemonic to seed using PBKDF2
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        seed::derive(&self.phrase, passphrase.unwrap_or(""))
    }

    /// Seed of the English rendering, identical for every language
    pub fn to_canonical_seed(&self, passphrase: Option<&str>) -> Seed {
        let english = serializer::render(&self.indices, Language::English.word_list());
        seed::derive(&english, passphrase.unwrap_or(""))
    }

    /// The same mnemonic rendered with another word list
    pub fn translate(&self, language: Language) -> Self {
        Self::from_indices(self.indices.clone(), language)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_language(s, Language::English)
    }
}
