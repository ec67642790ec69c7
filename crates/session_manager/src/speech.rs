//! Speech input collaborator interface
//!
//! The browser speech API is an external capability. The widget only
//! needs start/stop control and a stream of transcript events; interim
//! results are display-only, final results land in the composer.

use chat_core::{Language, Translations};

/// A transcript fragment from the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Partial result, subject to change. Not committed to the
    /// composer.
    Interim(String),
    /// Final result, appended to the composer.
    Final(String),
}

/// Errors the recognizer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechError {
    NotAllowed,
    NoSpeech,
    AudioCapture,
    Network,
    Other,
}

impl SpeechError {
    /// Localized message shown to the user.
    pub fn localized_message(&self, language: Language) -> &'static str {
        let t = Translations::for_language(language);
        match self {
            SpeechError::NotAllowed => t.speech_not_allowed,
            SpeechError::NoSpeech => t.speech_no_speech,
            SpeechError::AudioCapture => t.speech_audio_capture,
            SpeechError::Network => t.speech_network,
            SpeechError::Other => t.speech_failed,
        }
    }
}

/// Control surface for a speech recognizer implementation.
pub trait SpeechRecognizer: Send {
    /// Begin listening with the given BCP 47 locale.
    fn start(&mut self, locale: &str);

    /// Stop listening.
    fn stop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeRecognizer {
        listening: bool,
        locale: Option<String>,
    }

    impl SpeechRecognizer for FakeRecognizer {
        fn start(&mut self, locale: &str) {
            self.listening = true;
            self.locale = Some(locale.to_string());
        }

        fn stop(&mut self) {
            self.listening = false;
        }
    }

    #[test]
    fn test_recognizer_uses_language_locale() {
        let mut recognizer = FakeRecognizer::default();
        recognizer.start(Language::No.speech_locale());
        assert!(recognizer.listening);
        assert_eq!(recognizer.locale.as_deref(), Some("no-NO"));

        recognizer.stop();
        assert!(!recognizer.listening);
    }

    #[test]
    fn test_localized_speech_errors() {
        assert_eq!(
            SpeechError::NotAllowed.localized_message(Language::No),
            "Mikrofon-tilgang nektet"
        );
        assert_eq!(
            SpeechError::NotAllowed.localized_message(Language::En),
            "Microphone access denied"
        );
        assert_eq!(
            SpeechError::Other.localized_message(Language::En),
            "Speech recognition failed"
        );
    }
}
