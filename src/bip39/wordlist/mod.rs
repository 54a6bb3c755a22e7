//! BIP39 word lists and the process-wide lookup registry.
//!
//! Each supported [`Language`] owns exactly one [`WordList`]: an ordered
//! sequence of 2048 unique words together with a reverse index from word to
//! position. The reverse index is built once, on first use, and shared by
//! every caller afterwards.

pub mod chinese_simplified;
pub mod english;

use crate::{MnemonicError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of words in every BIP39 word list.
pub const WORDLIST_SIZE: usize = 2048;

/// Supported languages for BIP39 mnemonics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
}

impl Language {
    /// Every language with a bundled word list.
    pub const ALL: [Language; 2] = [Language::English, Language::ChineseSimplified];

    /// Get the word list for this language
    pub fn word_list(&self) -> &'static WordList {
        static ENGLISH: OnceLock<WordList> = OnceLock::new();
        static CHINESE_SIMPLIFIED: OnceLock<WordList> = OnceLock::new();

        match self {
            Language::English => {
                ENGLISH.get_or_init(|| WordList::new(Language::English, &english::WORDS))
            }
            Language::ChineseSimplified => CHINESE_SIMPLIFIED.get_or_init(|| {
                WordList::new(Language::ChineseSimplified, &chinese_simplified::WORDS)
            }),
        }
    }

    /// Get the raw words for this language
    pub fn words(&self) -> &'static [&'static str; WORDLIST_SIZE] {
        match self {
            Language::English => &english::WORDS,
            Language::ChineseSimplified => &chinese_simplified::WORDS,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::ChineseSimplified => "chinese_simplified",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "english" | "en" => Ok(Language::English),
            "chinese_simplified" | "zh_hans" | "zh" => Ok(Language::ChineseSimplified),
            other => Err(MnemonicError::Config(format!("Unsupported language: {}", other))),
        }
    }
}

/// An immutable word list with O(1) reverse lookup.
pub struct WordList {
    language: Language,
    words: &'static [&'static str; WORDLIST_SIZE],
    index: HashMap<&'static str, u16>,
}

impl WordList {
    fn new(language: Language, words: &'static [&'static str; WORDLIST_SIZE]) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, i as u16))
            .collect::<HashMap<_, _>>();
        log::debug!("Built {} word list index ({} entries)", language, index.len());

        Self { language, words, index }
    }

    /// Language this list belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Word at `index`, or `None` if the index is outside the list.
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    /// Position of `word` in the list.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All words in index order.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Always [`WORDLIST_SIZE`] for the bundled lists.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Separator placed between words when rendering a phrase.
    ///
    /// Both bundled languages use a plain ASCII space; parsing accepts any
    /// Unicode whitespace, including the ideographic space.
    pub fn separator(&self) -> &'static str {
        " "
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("language", &self.language)
            .field("len", &self.words.len())
            .finish()
    }
}
