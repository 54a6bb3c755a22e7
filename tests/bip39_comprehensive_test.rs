//! End-to-end tests across generation, validation, correction and seeds

use mnemonic_rs::bip39::*;
use mnemonic_rs::{init, MnemonicConfig, MnemonicError, Result};

#[test]
fn test_mnemonic_generation_all_sizes() -> Result<()> {
    for word_count in WordCount::ALL {
        for language in Language::ALL {
            let mnemonic = Mnemonic::generate_with_language(word_count.entropy_bits(), language)?;
            assert_eq!(mnemonic.word_count(), word_count.word_count());
            assert_eq!(mnemonic.language(), language);
            assert!(is_valid(mnemonic.phrase(), language.word_list()));
            assert_eq!(mnemonic.to_entropy()?.len(), word_count.entropy_bytes());
        }
    }
    Ok(())
}

#[test]
fn test_mnemonic_generation_invalid_entropy() {
    assert!(Mnemonic::generate(64).is_err()); // Too small
    assert!(Mnemonic::generate(129).is_err()); // Not standard
    assert!(Mnemonic::generate(512).is_err()); // Too large
}

#[test]
fn test_from_entropy_invalid_lengths() {
    for len in [0usize, 1, 15, 17, 33, 64] {
        let entropy = vec![0u8; len];
        assert!(matches!(
            Mnemonic::from_entropy(&entropy),
            Err(MnemonicError::InvalidEntropyLength(bits)) if bits == len * 8
        ));
    }
}

#[test]
fn test_last_word_checksum_space() {
    // Exactly 2^cs of the 2048 last words yield a valid 12-word phrase.
    let list = Language::English.word_list();
    let mut indices = codec::encode(&[0x42u8; 16]).unwrap();
    let last = indices.len() - 1;

    let valid = (0..2048u16)
        .filter(|&candidate| {
            indices[last] = candidate;
            validator::is_valid(&serializer::render(&indices, list), list)
        })
        .count();
    assert_eq!(valid, 128);
}

#[test]
fn test_corrector_positions() -> Result<()> {
    let list = Language::English.word_list();
    let original = Mnemonic::from_entropy(&[0x42u8; 16])?;
    let mut indices = original.indices().to_vec();
    indices[11] ^= 0b101;
    let broken = serializer::render(&indices, list);
    assert!(!is_valid(&broken, list));

    let fixed = Corrector::new().positions(vec![11, 11]).fix(&broken, list)?;
    assert_eq!(fixed, original.phrase());

    let unchanged = Corrector::new().positions(vec![0, 3]).fix(original.phrase(), list)?;
    assert_eq!(unchanged, original.phrase());
    Ok(())
}

#[test]
fn test_seed_derivation_checked_and_canonical() -> Result<()> {
    let english = Language::English.word_list();
    let chinese = Language::ChineseSimplified.word_list();
    let phrase = "legal winner thank year wave sausage worth useful legal winner thank yellow";

    let checked = seed::derive_checked(phrase, "TREZOR", english)?;
    assert_eq!(checked, seed::derive(phrase, "TREZOR"));
    assert_eq!(checked.as_bytes().len(), seed::SEED_LENGTH);

    let chinese_phrase = translate::from_english(phrase, Language::ChineseSimplified)?;
    assert_eq!(seed::derive_canonical(&chinese_phrase, "TREZOR", chinese)?, checked);
    assert!(seed::derive_checked(&chinese_phrase, "TREZOR", english).is_err());
    Ok(())
}

#[test]
fn test_error_classification() {
    let list = Language::English.word_list();
    let errors = [
        entropy_from_mnemonic("abandon", list).unwrap_err(),
        entropy_from_mnemonic(&(vec!["abandon"; 11].join(" ") + " qqq"), list).unwrap_err(),
    ];
    assert!(errors.iter().all(|e| e.is_structural() && !e.is_checksum_error()));

    let checksum = entropy_from_mnemonic(&vec!["abandon"; 12].join(" "), list).unwrap_err();
    assert!(checksum.is_checksum_error());
    assert!(!checksum.is_structural());
}

#[test]
fn test_init_with_config() -> Result<()> {
    let config = MnemonicConfig {
        language: Language::ChineseSimplified,
        ..MnemonicConfig::default()
    };
    init(&config)?;
    init(&config)?;

    let mnemonic = Mnemonic::generate_with_language(128, config.language)?;
    let words: Vec<&str> = mnemonic.words().collect();
    let mut broken = words.clone();
    let last_index = mnemonic.indices()[11];
    // Flip the lowest checksum bit of the last word.
    broken[11] = config.language.word_list().word(last_index ^ 1).unwrap();

    let fixed = config.corrector().fix(&broken.join(" "), config.language.word_list())?;
    assert_eq!(fixed, mnemonic.phrase());
    Ok(())
}
