//! Secure entropy generation.

use super::codec::WordCount;
use crate::{MnemonicError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Generate `bits` of entropy from the operating system's CSPRNG.
///
/// `bits` must be one of 128, 160, 192, 224 or 256. A failing random source
/// is reported as [`MnemonicError::InsufficientRandomness`] and never retried.
pub fn new_entropy(bits: usize) -> Result<Vec<u8>> {
    fill_entropy(&mut OsRng, bits)
}

/// Generate `bits` of entropy from a caller-supplied cryptographic RNG.
pub fn fill_entropy<R: RngCore + CryptoRng>(rng: &mut R, bits: usize) -> Result<Vec<u8>> {
    let word_count =
        WordCount::from_entropy_bits(bits).ok_or(MnemonicError::InvalidEntropyLength(bits))?;

    let mut entropy = vec![0u8; word_count.entropy_bytes()];
    rng.try_fill_bytes(&mut entropy).map_err(|e| {
        log::error!("Secure random source failed while generating {} bits: {}", bits, e);
        MnemonicError::InsufficientRandomness(e.to_string())
    })?;

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy pool exhausted",
            )))
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn test_new_entropy_sizes() {
        for bits in (128..=256).step_by(32) {
            let entropy = new_entropy(bits).unwrap();
            assert_eq!(entropy.len(), bits / 8);
        }
    }

    #[test]
    fn test_new_entropy_rejects_bad_sizes() {
        for bits in 0..=300 {
            if bits >= 128 && bits <= 256 && bits % 32 == 0 {
                continue;
            }
            assert!(matches!(
                new_entropy(bits),
                Err(MnemonicError::InvalidEntropyLength(b)) if b == bits
            ));
        }
    }

    #[test]
    fn test_fill_entropy_is_deterministic_for_seeded_rng() {
        let a = fill_entropy(&mut StdRng::seed_from_u64(7), 256).unwrap();
        let b = fill_entropy(&mut StdRng::seed_from_u64(7), 256).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_failing_source_is_surfaced() {
        match fill_entropy(&mut FailingRng, 128) {
            Err(MnemonicError::InsufficientRandomness(msg)) => {
                assert!(msg.contains("entropy pool exhausted"))
            }
            other => panic!("Expected InsufficientRandomness, got {:?}", other),
        }
    }

    #[test]
    fn test_generated_entropy_differs() {
        assert_ne!(new_entropy(256).unwrap(), new_entropy(256).unwrap());
    }
}
