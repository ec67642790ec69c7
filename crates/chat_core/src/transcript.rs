//! Plain-text conversation export

use chrono::{DateTime, Local};

use crate::message::{Message, MessageAuthor};

/// Render the conversation as a downloadable transcript.
///
/// One entry per message, `<Du|Skyon AI> (<localized time>): <text>`,
/// blank line between entries.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| {
            let label = match msg.author {
                MessageAuthor::User => "Du",
                MessageAuthor::Bot => "Skyon AI",
            };
            format!(
                "{} ({}): {}",
                label,
                msg.created_at.format("%H:%M:%S"),
                msg.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// File name for a transcript downloaded at `now`.
pub fn transcript_filename(now: DateTime<Local>) -> String {
    format!("skyon-chat-{}.txt", now.format("%Y-%m-%d"))
}
