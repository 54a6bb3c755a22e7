//! # mnemonic-rs
//!
//! BIP39 mnemonic phrases in pure Rust: entropy ↔ phrase encoding with a
//! SHA-256 checksum, PBKDF2-HMAC-SHA512 seed derivation, validation,
//! single-word checksum correction and translation between word lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use mnemonic_rs::{Language, Mnemonic};
//!
//! let mnemonic = Mnemonic::generate_with_language(128, Language::ChineseSimplified)?;
//! assert_eq!(mnemonic.word_count(), 12);
//!
//! let english = mnemonic.translate(Language::English);
//! assert_eq!(english.to_seed(Some("TREZOR")), mnemonic.to_canonical_seed(Some("TREZOR")));
//! # Ok::<(), mnemonic_rs::MnemonicError>(())
//! ```
//!
//! ## Supported Languages
//!
//! - English
//! - Chinese (Simplified)
//!
//! Each word list holds 2048 words; a word encodes 11 bits, and word `i`
//! means the same bits in every language.
//!
//! ## Error Handling
//!
//! All fallible APIs return [`Result<T, MnemonicError>`](error::MnemonicError).

pub mod bip39;
pub mod error;
pub mod types;
pub mod utils;

pub use bip39::{
    entropy_from_mnemonic, is_valid, CorrectionScope, Corrector, Language, Mnemonic, Seed,
    WordCount, WordList,
};
pub use error::{MnemonicError, Result};
pub use types::MnemonicConfig;

use utils::logging::{init_logging, LoggingConfig};

/// Initializes the library. This should be called once per process.
///
/// Installs an `env_logger` backend at the configured level and builds the
/// configured word list's reverse index up front. Later calls leave the
/// installed logger in place.
///
/// ```rust
/// use mnemonic_rs::{init, MnemonicConfig};
///
/// init(&MnemonicConfig::default()).expect("Failed to initialize");
/// ```
pub fn init(config: &MnemonicConfig) -> Result<()> {
    let logging = LoggingConfig::from(config);
    if !init_logging(&logging)? {
        log::debug!("Logger already installed, keeping it");
    }

    let word_list = config.language.word_list();
    log::info!(
        "Initialized with {} word list ({} words), correction scope {:?}",
        config.language,
        word_list.len(),
        config.correction_scope
    );
    Ok(())
}
