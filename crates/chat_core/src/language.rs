//! Supported widget languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the widget can render and send to the webhook.
///
/// The selected language is persisted across sessions as a single
/// key-value pair; everything else is per-session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Norwegian (bokmål)
    No,
    /// English
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::No
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(String);

impl Language {
    /// Wire code sent to the webhook and stored on disk.
    pub fn code(&self) -> &'static str {
        match self {
            Language::No => "no",
            Language::En => "en",
        }
    }

    /// BCP 47 locale used when starting speech recognition.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::No => "no-NO",
            Language::En => "en-US",
        }
    }

    /// Display name shown in the language picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::No => "Norsk",
            Language::En => "English",
        }
    }

    /// All supported languages, in picker order.
    pub fn all() -> &'static [Language] {
        &[Language::No, Language::En]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no" => Ok(Language::No),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_norwegian() {
        assert_eq!(Language::default(), Language::No);
    }

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("no".parse::<Language>().unwrap(), Language::No);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("sv".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&Language::No).unwrap(), "\"no\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn test_speech_locales() {
        assert_eq!(Language::No.speech_locale(), "no-NO");
        assert_eq!(Language::En.speech_locale(), "en-US");
    }
}
