//! Single-word correction of mnemonics whose checksum does not verify.
//!
//! The search is deliberately brute force. Each candidate position costs at
//! most one full pass over the word list, so a search over `k` positions is
//! bounded by `2048 × k` decode attempts. With the default
//! [`CorrectionScope::ChecksumBits`] the final position only tries the
//! `2^cs` words that keep the entropy bits of the typed word, which is 16 to
//! 256 attempts.

use super::codec::{self, WordCount};
use super::serializer;
use super::wordlist::{WordList, WORDLIST_SIZE};
use crate::{MnemonicError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which replacement words are tried at a candidate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionScope {
    /// At the final position only the checksum bits may change, so the
    /// recovered entropy is the one the user typed. Other positions try
    /// every word.
    #[default]
    ChecksumBits,
    /// Every word of the list is tried at every candidate position.
    FullWord,
}

impl FromStr for CorrectionScope {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "checksum_bits" | "checksum" => Ok(CorrectionScope::ChecksumBits),
            "full_word" | "full" => Ok(CorrectionScope::FullWord),
            other => Err(MnemonicError::Config(format!("Unknown correction scope: {}", other))),
        }
    }
}

/// Searches for the unique single-word substitution that repairs a checksum.
#[derive(Debug, Clone, Default)]
pub struct Corrector {
    positions: Option<Vec<usize>>,
    scope: CorrectionScope,
}

impl Corrector {
    /// A corrector trying the last word with [`CorrectionScope::ChecksumBits`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Word positions (0-based) where substitutions are tried.
    ///
    /// Without an explicit set only the last word is tried.
    pub fn positions(mut self, positions: Vec<usize>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Set which replacement words are tried.
    pub fn scope(mut self, scope: CorrectionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Repair `phrase` by substituting a single word.
    ///
    /// A phrase that is already valid is returned as is (re-rendered with
    /// single separators). Fails with [`MnemonicError::NotCorrectable`] when
    /// the phrase does not parse, when a configured position is out of range,
    /// or when zero or more than one substitution restores the checksum.
    pub fn fix(&self, phrase: &str, word_list: &WordList) -> Result<String> {
        let indices = serializer::parse(phrase, word_list)
            .map_err(|e| MnemonicError::NotCorrectable(format!("phrase does not parse: {}", e)))?;

        if codec::decode(&indices).is_ok() {
            return Ok(serializer::render(&indices, word_list));
        }

        let positions = self.resolve_positions(indices.len())?;
        let mut found = Vec::new();
        let mut trial = indices.clone();

        for &position in &positions {
            let original = indices[position];
            for candidate in self.candidates(&indices, position) {
                if candidate == original {
                    continue;
                }
                trial[position] = candidate;
                if codec::decode(&trial).is_ok() {
                    found.push((position, candidate));
                }
            }
            trial[position] = original;
        }

        match found.as_slice() {
            [(position, candidate)] => {
                log::debug!("Corrected word at position {}", position);
                trial[*position] = *candidate;
                Ok(serializer::render(&trial, word_list))
            }
            [] => {
                log::warn!("No substitution at positions {:?} restores the checksum", positions);
                Err(MnemonicError::NotCorrectable(
                    "no single-word substitution restores the checksum".to_string(),
                ))
            }
            many => {
                log::warn!(
                    "{} substitutions at positions {:?} restore the checksum",
                    many.len(),
                    positions
                );
                Err(MnemonicError::NotCorrectable(format!(
                    "{} different substitutions restore the checksum",
                    many.len()
                )))
            }
        }
    }

    fn resolve_positions(&self, word_count: usize) -> Result<Vec<usize>> {
        let mut positions = match &self.positions {
            Some(positions) => positions.clone(),
            None => vec![word_count - 1],
        };
        if positions.is_empty() {
            return Err(MnemonicError::NotCorrectable(
                "empty set of candidate positions".to_string(),
            ));
        }
        positions.sort_unstable();
        positions.dedup();

        if let Some(&bad) = positions.iter().find(|&&p| p >= word_count) {
            return Err(MnemonicError::NotCorrectable(format!(
                "position {} is outside a {}-word phrase",
                bad, word_count
            )));
        }
        Ok(positions)
    }

    fn candidates(&self, indices: &[u16], position: usize) -> Box<dyn Iterator<Item = u16>> {
        let last = indices.len() - 1;
        let checksum_bits = WordCount::from_word_count(indices.len())
            .map(|wc| wc.checksum_bits())
            .unwrap_or(0);

        if self.scope == CorrectionScope::ChecksumBits && position == last && checksum_bits > 0 {
            let checksum_mask = (1u16 << checksum_bits) - 1;
            let entropy_part = indices[last] & !checksum_mask;
            Box::new((0..=checksum_mask).map(move |checksum| entropy_part | checksum))
        } else {
            Box::new(0..WORDLIST_SIZE as u16)
        }
    }
}

/// Repair `phrase` with the default [`Corrector`].
pub fn fix(phrase: &str, word_list: &WordList) -> Result<String> {
    Corrector::default().fix(phrase, word_list)
}
