//! Interview transcript entries and plain-text rendering

use serde::{Deserialize, Serialize};

/// One speaker utterance with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who spoke ("interviewer", "participant", "system", ...)
    #[serde(default = "default_speaker")]
    pub speaker: String,

    /// What was said
    #[serde(default)]
    pub text: String,

    /// Position within the interview as recorded by the client, e.g. "14:03:22"
    #[serde(default)]
    pub timestamp: String,
}

fn default_speaker() -> String {
    "Unknown".to_string()
}

/// Render transcript entries as one text block, one line per entry in input
/// order: `[timestamp] SPEAKER: text` with the speaker upper-cased.
///
/// Missing fields were already defaulted at deserialization, so this cannot
/// fail. An empty transcript renders as the empty string.
pub fn format_transcript(entries: &[TranscriptEntry]) -> String {
    let mut formatted = String::new();
    for entry in entries {
        formatted.push('[');
        formatted.push_str(&entry.timestamp);
        formatted.push_str("] ");
        formatted.push_str(&entry.speaker.to_uppercase());
        formatted.push_str(": ");
        formatted.push_str(&entry.text);
        formatted.push('\n');
    }
    formatted.trim().to_string()
}
