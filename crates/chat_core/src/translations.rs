//! Per-language static text and quick-reply lists
//!
//! Pure data lookup, no state. The presentation layer and the session
//! controller both read from here; nothing writes.

use crate::language::Language;

/// Static text for one language.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    // UI labels
    pub settings: &'static str,
    pub language: &'static str,
    pub close_chat: &'static str,
    pub open_chat: &'static str,
    pub start_over: &'static str,
    pub clear_history: &'static str,
    pub download_transcript: &'static str,
    pub send_message: &'static str,
    pub type_message: &'static str,
    pub powered_by: &'static str,

    // Speech recognition
    pub start_listening: &'static str,
    pub stop_listening: &'static str,
    pub listening: &'static str,
    pub speech_not_allowed: &'static str,
    pub speech_no_speech: &'static str,
    pub speech_audio_capture: &'static str,
    pub speech_network: &'static str,
    pub speech_failed: &'static str,

    // Conversation starters
    pub welcome_messages: &'static [&'static str],
    pub quick_actions: &'static [&'static str],
    pub quick_replies: &'static [&'static str],

    // Privacy
    pub privacy_text: &'static str,

    /// Shown when the webhook request itself fails.
    pub error_message: &'static str,
    /// Shown when a successful response carries no output text.
    pub processing_error: &'static str,
}

pub const NO: Translations = Translations {
    settings: "Innstillinger",
    language: "Språk",
    close_chat: "Lukk chat",
    open_chat: "Åpne chat",
    start_over: "Start på nytt",
    clear_history: "Slett chatloggen",
    download_transcript: "Last ned samtale",
    send_message: "Send melding",
    type_message: "Skriv din melding...",
    powered_by: "Powered by",

    start_listening: "Start tale-gjenkjenning",
    stop_listening: "Stopp lytting",
    listening: "Lytter...",
    speech_not_allowed: "Mikrofon-tilgang nektet",
    speech_no_speech: "Ingen tale oppdaget",
    speech_audio_capture: "Mikrofon ikke tilgjengelig",
    speech_network: "Nettverksfeil",
    speech_failed: "Tale-gjenkjenning feilet",

    welcome_messages: &[
        "Hei og velkommen – Jeg er Skyon-boten",
        "Hva kan jeg hjelpe deg med i dag?",
        "Still spørsmålet ditt nedenfor eller klikk på en av knappene.",
        "Kan jeg ikke hjelpe deg, setter jeg deg i kontakt med et menneske 👷‍♂️",
    ],
    quick_actions: &["Ofte stilte spørsmål", "Dine personopplysninger – GDPR"],
    quick_replies: &["Renovering", "Prisoverslag", "Finn ledig tid", "Kontakt menneske"],

    privacy_text: "Ved å fortsette samtykker du til vår personvernerklæring. \
        Meldingene dine sendes til OpenAI for behandling – unngå sensitive personopplysninger.",

    error_message: "Beklager, det oppstod en feil. Prøv igjen senere.",
    processing_error: "Beklager, jeg kunne ikke behandle forespørselen din.",
};

pub const EN: Translations = Translations {
    settings: "Settings",
    language: "Language",
    close_chat: "Close chat",
    open_chat: "Open chat",
    start_over: "Start over",
    clear_history: "Clear chat history",
    download_transcript: "Download conversation",
    send_message: "Send message",
    type_message: "Type your message...",
    powered_by: "Powered by",

    start_listening: "Start speech recognition",
    stop_listening: "Stop listening",
    listening: "Listening...",
    speech_not_allowed: "Microphone access denied",
    speech_no_speech: "No speech detected",
    speech_audio_capture: "Microphone not available",
    speech_network: "Network error",
    speech_failed: "Speech recognition failed",

    welcome_messages: &[
        "Hello and welcome – I'm the Skyon bot",
        "How can I help you today?",
        "Ask your question below or click one of the buttons.",
        "If I can't help you, I'll connect you with a human 👷‍♂️",
    ],
    quick_actions: &["Frequently asked questions", "Your personal data – GDPR"],
    quick_replies: &["Renovation", "Price estimate", "Find available time", "Contact human"],

    privacy_text: "By continuing you agree to our privacy policy. \
        Your messages are sent to OpenAI for processing – avoid sensitive personal information.",

    error_message: "Sorry, an error occurred. Please try again later.",
    processing_error: "Sorry, I could not process your request.",
};

impl Translations {
    /// Look up the translation table for a language.
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::No => &NO,
            Language::En => &EN,
        }
    }
}
