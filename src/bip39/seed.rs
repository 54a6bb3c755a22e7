//! Mnemonic-to-seed stretching (PBKDF2-HMAC-SHA512).

use super::wordlist::{Language, WordList};
use super::{serializer, validator};
use crate::Result;
use sha2::Sha512;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Number of PBKDF2 iterations for mnemonic-to-seed conversion
pub const PBKDF2_ITERATIONS: u32 = 2048;

/// Length of a derived seed in bytes.
pub const SEED_LENGTH: usize = 64;

const SALT_PREFIX: &str = "mnemonic";

/// Represents a BIP39 seed derived from a mnemonic
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(pub [u8; SEED_LENGTH]);

impl Seed {
    /// Get the seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// Convert to a vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Stretch `phrase` and `passphrase` into a 64-byte seed.
///
/// Both inputs are NFKD-normalised. The phrase is not validated in any way:
/// unknown words, wrong lengths and bad checksums all still produce a seed.
pub fn derive(phrase: &str, passphrase: &str) -> Seed {
    let password = phrase.nfkd().collect::<String>();
    let salt = format!("{}{}", SALT_PREFIX, passphrase).nfkd().collect::<String>();

    let mut seed = [0u8; SEED_LENGTH];
    pbkdf2::pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut seed,
    );

    Seed(seed)
}

/// Validate `phrase` against `word_list`, then derive exactly as [`derive`].
pub fn derive_checked(phrase: &str, passphrase: &str, word_list: &WordList) -> Result<Seed> {
    validator::entropy_from_mnemonic(phrase, word_list)?;
    Ok(derive(phrase, passphrase))
}

/// Validate `phrase`, then derive from its English rendering.
///
/// Equivalent mnemonics in different languages share one seed this way.
pub fn derive_canonical(phrase: &str, passphrase: &str, word_list: &WordList) -> Result<Seed> {
    let indices = serializer::parse(phrase, word_list)?;
    super::codec::decode(&indices)?;

    let english = serializer::render(&indices, Language::English.word_list());
    Ok(derive(&english, passphrase))
}
