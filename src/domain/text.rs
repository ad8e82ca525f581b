//! Text to be spoken

use std::fmt;

/// Number of characters shown in progress messages
pub const PREVIEW_CHARS: usize = 50;

/// Text handed unchanged to the speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    /// Wrap the text exactly as given
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Full text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Shortened form for progress output
    ///
    /// Keeps the first [`PREVIEW_CHARS`] characters and appends `...` when
    /// anything was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.0.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

impl fmt::Display for SpeechText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
