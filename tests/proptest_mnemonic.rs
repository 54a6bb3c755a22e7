use proptest::prelude::*;

use mnemonic_rs::bip39::{codec, corrector, serializer, validator, Language, Mnemonic};

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entropy_phrase_entropy_roundtrip(
        entropy in entropy_strategy(),
        language in language_strategy()
    ) {
        let list = language.word_list();
        let indices = codec::encode(&entropy).unwrap();
        prop_assert_eq!(indices.len(), (entropy.len() * 8 + entropy.len() / 4) / 11);
        prop_assert!(indices.iter().all(|&i| i < 2048));

        let phrase = serializer::render(&indices, list);
        prop_assert_eq!(validator::entropy_from_mnemonic(&phrase, list).unwrap(), entropy);
    }

    #[test]
    fn translation_keeps_entropy(entropy in entropy_strategy()) {
        let english = Mnemonic::from_entropy(&entropy).unwrap();
        let chinese = english.translate(Language::ChineseSimplified);
        prop_assert_eq!(chinese.indices(), english.indices());
        prop_assert_eq!(chinese.to_entropy().unwrap(), entropy);
        prop_assert_eq!(chinese.translate(Language::English), english);
    }

    #[test]
    fn corrector_restores_checksum_bits(entropy in entropy_strategy(), flip in 1u16..256) {
        let list = Language::English.word_list();
        let mut indices = codec::encode(&entropy).unwrap();
        let checksum_bits = entropy.len() / 4;
        let mask = (1u16 << checksum_bits) - 1;
        let last = indices.len() - 1;

        let flip = flip & mask;
        prop_assume!(flip != 0);
        let original = serializer::render(&indices, list);
        indices[last] ^= flip;
        let broken = serializer::render(&indices, list);

        prop_assert!(!validator::is_valid(&broken, list));
        prop_assert_eq!(corrector::fix(&broken, list).unwrap(), original);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn canonical_seed_is_language_independent(
        entropy in entropy_strategy(),
        passphrase in "[a-zA-Z0-9 ]{0,16}"
    ) {
        let english = Mnemonic::from_entropy(&entropy).unwrap();
        let chinese = english.translate(Language::ChineseSimplified);
        prop_assert_eq!(
            chinese.to_canonical_seed(Some(passphrase.as_str())),
            english.to_seed(Some(passphrase.as_str()))
        );
    }
}
