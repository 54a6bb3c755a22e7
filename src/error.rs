use thiserror::Error;

/// Errors produced by mnemonic encoding, validation, correction and
/// seed derivation.
#[derive(Error, Debug)]
pub enum MnemonicError {
    #[error("Invalid entropy length: {0} bits. Must be one of: 128, 160, 192, 224, 256")]
    InvalidEntropyLength(usize),

    #[error("Invalid mnemonic length: {0} words. Must be 12, 15, 18, 21, or 24 words")]
    InvalidWordCount(usize),

    #[error("Invalid word: {0}")]
    UnknownWord(String),

    #[error("Invalid index sequence length: {0}")]
    InvalidLength(usize),

    #[error("Invalid word index: {0}. Must be below 2048")]
    InvalidIndex(u16),

    #[error("Invalid mnemonic checksum")]
    ChecksumMismatch,

    #[error("Mnemonic is not correctable: {0}")]
    NotCorrectable(String),

    #[error("Secure random source failed: {0}")]
    InsufficientRandomness(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MnemonicError {
    /// True for a phrase whose words are all known but whose checksum is wrong.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, MnemonicError::ChecksumMismatch)
    }

    /// True for errors caused by the shape of the input rather than its checksum.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MnemonicError::InvalidEntropyLength(_)
                | MnemonicError::InvalidWordCount(_)
                | MnemonicError::UnknownWord(_)
                | MnemonicError::InvalidLength(_)
                | MnemonicError::InvalidIndex(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MnemonicError>;
