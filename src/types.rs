use serde::{Deserialize, Serialize};

use crate::bip39::{CorrectionScope, Corrector, Language};

// Re-export logging types
pub use crate::utils::logging::LogLevel;

/// Process-wide configuration, loadable from JSON and environment variables.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MnemonicConfig {
    /// Word list used when none is given explicitly
    pub language: Language,
    /// Log level for the installed logger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Word positions tried by the corrector. `None` means the last word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction_positions: Option<Vec<usize>>,
    pub correction_scope: CorrectionScope,
}

impl MnemonicConfig {
    /// The [`Corrector`] described by this configuration.
    pub fn corrector(&self) -> Corrector {
        let corrector = Corrector::new().scope(self.correction_scope);
        match &self.correction_positions {
            Some(positions) => corrector.positions(positions.clone()),
            None => corrector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_json() {
        let json = serde_json::to_string(&MnemonicConfig::default()).unwrap();
        assert_eq!(json, r#"{"language":"english","correction_scope":"checksum_bits"}"#);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{"language":"chinese_simplified","correction_positions":[0,11]}"#;
        let config: MnemonicConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.language, Language::ChineseSimplified);
        assert_eq!(config.correction_positions, Some(vec![0, 11]));
        assert_eq!(config.correction_scope, CorrectionScope::ChecksumBits);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_config_corrector() {
        let config = MnemonicConfig::default();
        let list = config.language.word_list();
        let broken = vec!["abandon"; 12].join(" ");
        assert!(config.corrector().fix(&broken, list).unwrap().ends_with(" about"));

        let config = MnemonicConfig {
            correction_positions: Some(vec![20]),
            ..MnemonicConfig::default()
        };
        assert!(config.corrector().fix(&broken, list).is_err());
    }
}
