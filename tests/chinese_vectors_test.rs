//! Chinese (Simplified) word list vectors.
//!
//! Chinese phrases share indices with their English counterparts, so the
//! canonical seed of every phrase here is the standard English seed.

use mnemonic_rs::bip39::{corrector, translate, validator, Language, Mnemonic};
use mnemonic_rs::MnemonicError;

/// (entropy, phrase, canonical seed with passphrase "TREZOR")
const CHINESE_VECTORS: &[(&str, &str, &str)] = &[
    ("00000000000000000000000000000000", "的 的 的 的 的 的 的 的 的 的 的 在", "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"),
    ("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f", "枪 疫 霉 尝 俩 闹 饿 贤 枪 疫 霉 卿", "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"),
    ("80808080808080808080808080808080", "壤 对 据 人 三 谈 我 表 壤 对 据 不", "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8"),
    ("ffffffffffffffffffffffffffffffff", "歇 歇 歇 歇 歇 歇 歇 歇 歇 歇 歇 逻", "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069"),
    ("9e885d952ad362caeb4efe34a8e91bd2", "蒙 台 脱 纪 构 硫 浆 霉 感 仅 鱼 汤", "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028"),
];

#[test]
fn test_chinese_vectors() {
    for (entropy_hex, phrase, seed_hex) in CHINESE_VECTORS {
        let entropy = hex::decode(entropy_hex).unwrap();
        let mnemonic =
            Mnemonic::from_entropy_with_language(&entropy, Language::ChineseSimplified).unwrap();
        assert_eq!(mnemonic.phrase(), *phrase);
        assert_eq!(mnemonic.to_canonical_seed(Some("TREZOR")).to_hex(), *seed_hex);

        let parsed = Mnemonic::from_str_with_language(phrase, Language::ChineseSimplified).unwrap();
        assert_eq!(parsed.to_entropy().unwrap(), entropy);
    }
}

#[test]
fn test_native_chinese_seed_differs_from_canonical() {
    let (_, phrase, canonical) = CHINESE_VECTORS[0];
    let mnemonic = Mnemonic::from_str_with_language(phrase, Language::ChineseSimplified).unwrap();
    assert_eq!(
        mnemonic.to_seed(Some("TREZOR")).to_hex(),
        "7f7c7f91ef81f0fb6a3b95b346c50e6472c1d554f8ba90637bad8afce4a4de87c322c1acafa2f6f5e9a8f9b2d2c40e9d389efdc2adbe4445c21a0939fb39e91f"
    );
    assert_ne!(mnemonic.to_seed(Some("TREZOR")).to_hex(), canonical);
}

#[test]
fn test_bad_chinese_sentences() {
    let list = Language::ChineseSimplified.word_list();

    let wrong_count = [
        "的 的 的 的 的 的 的 的 的 的 的",
        "的 的 的 的 的 的 的 的 的 的 的 的 的",
        "的 的 的 的 的",
    ];
    for phrase in wrong_count {
        assert!(matches!(
            validator::entropy_from_mnemonic(phrase, list),
            Err(MnemonicError::InvalidWordCount(_))
        ));
    }

    let unknown = [
        "的 的 的 的 的 的 的 的 的 的 的 栖",
        "歇, 歇 歇 歇 歇 歇 歇 歇 歇 歇 歇 逻",
        "的 的 的 的 的 的 的 的 的 的 的 壤s",
    ];
    for phrase in unknown {
        assert!(matches!(
            validator::entropy_from_mnemonic(phrase, list),
            Err(MnemonicError::UnknownWord(_))
        ));
    }

    let bad_checksum = [
        "膨 蔬 寺 骤 穆 冶 枯 册 尸 凸 绅 坯",
        "的 的 的 的 的 的 的 的 的 的 的 壤",
    ];
    for phrase in bad_checksum {
        assert!(matches!(
            validator::entropy_from_mnemonic(phrase, list),
            Err(MnemonicError::ChecksumMismatch)
        ));
        assert!(!validator::is_valid(phrase, list));
    }
}

#[test]
fn test_fix_then_translate() {
    let list = Language::ChineseSimplified.word_list();
    let fixed = corrector::fix("一 二 三 四 五 六 其 吧 就 时 啊 不", list).unwrap();
    assert_eq!(fixed, "一 二 三 四 五 六 其 吧 就 时 啊 上");
    assert_eq!(
        hex::encode(validator::entropy_from_mnemonic(&fixed, list).unwrap()),
        "0021402007617a4a437af903c0518e00"
    );

    let english = translate::to_english(&fixed, Language::ChineseSimplified).unwrap();
    assert_eq!(
        translate::from_english(&english, Language::ChineseSimplified).unwrap(),
        fixed
    );
}
