//! Supported translation targets.
//!
//! The target language selects both the translation destination and the
//! synthesis voice. The set is closed: adding a language means adding an
//! enum variant, and `match` exhaustiveness keeps every table total.

use crate::error::VoxbridgeError;
use std::fmt;
use std::str::FromStr;

/// A supported target language for translation and synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageTarget {
    English,
    French,
    German,
}

impl LanguageTarget {
    /// All supported targets, in display order.
    pub const ALL: [LanguageTarget; 3] = [
        LanguageTarget::English,
        LanguageTarget::French,
        LanguageTarget::German,
    ];

    /// ISO 639-1 code used on the wire and in output paths.
    pub fn code(self) -> &'static str {
        match self {
            LanguageTarget::English => "en",
            LanguageTarget::French => "fr",
            LanguageTarget::German => "de",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            LanguageTarget::English => "English",
            LanguageTarget::French => "French",
            LanguageTarget::German => "German",
        }
    }

    /// Identifier of the synthesis model for this language.
    ///
    /// One model per language, resolved at compile time. There is no
    /// dynamic registration.
    pub fn synthesis_model(self) -> &'static str {
        match self {
            LanguageTarget::English => "tts_models/en/ljspeech/tacotron2-DDC",
            LanguageTarget::French => "tts_models/fr/css10/vits",
            LanguageTarget::German => "tts_models/de/thorsten/tacotron2-DCA",
        }
    }
}

impl fmt::Display for LanguageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageTarget {
    type Err = VoxbridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageTarget::English),
            "fr" => Ok(LanguageTarget::French),
            "de" => Ok(LanguageTarget::German),
            other => Err(VoxbridgeError::UnsupportedLanguage {
                code: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_target_has_exactly_one_synthesis_model() {
        let mut seen = HashSet::new();
        for lang in LanguageTarget::ALL {
            let model = lang.synthesis_model();
            assert!(!model.is_empty(), "{lang} maps to an empty model id");
            assert!(
                seen.insert(model),
                "{lang} shares a synthesis model with another target"
            );
        }
        assert_eq!(seen.len(), LanguageTarget::ALL.len());
    }

    #[test]
    fn codes_round_trip_through_from_str() {
        for lang in LanguageTarget::ALL {
            let parsed: LanguageTarget = lang.code().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let result = "ja".parse::<LanguageTarget>();
        match result {
            Err(VoxbridgeError::UnsupportedLanguage { code }) => assert_eq!(code, "ja"),
            other => panic!("Expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(LanguageTarget::French.to_string(), "fr");
    }

    #[test]
    fn synthesis_models_match_demo_table() {
        assert_eq!(
            LanguageTarget::English.synthesis_model(),
            "tts_models/en/ljspeech/tacotron2-DDC"
        );
        assert_eq!(
            LanguageTarget::French.synthesis_model(),
            "tts_models/fr/css10/vits"
        );
        assert_eq!(
            LanguageTarget::German.synthesis_model(),
            "tts_models/de/thorsten/tacotron2-DCA"
        );
    }
}
