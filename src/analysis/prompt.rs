//! Prompt and fallback templates for literary analysis.

/// Header that every usable analysis must contain.
pub const SIMPLIFIED_MEANING_MARKER: &str = "1. Simplified Meaning:";

/// Characters of the input echoed back in a fallback analysis.
pub const FALLBACK_EXCERPT_CHARS: usize = 200;

/// Why an analysis was replaced by the canned fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The model answered, but with nothing usable.
    UnusableCompletion,
    /// The call to the model failed outright.
    RequestFailed,
}

impl FallbackReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::UnusableCompletion => "Fallback",
            Self::RequestFailed => "API Request Failed",
        }
    }
}

pub fn build_prompt(text: &str) -> String {
    format!(
        "\nAnalyze the following text for a literary reader:\n\
         Text: \"{text}\"\n\
         {SIMPLIFIED_MEANING_MARKER}\n\
         2. Metaphors/Symbols:\n\
         3. Philosophical Themes:\n"
    )
}

pub fn build_fallback(text: &str, reason: FallbackReason) -> String {
    let excerpt: String = text.chars().take(FALLBACK_EXCERPT_CHARS).collect();
    format!(
        "{SIMPLIFIED_MEANING_MARKER}\n{excerpt}... ({label})\n\n\
         2. Metaphors/Symbols:\nNone\n\n\
         3. Philosophical Themes:\nNone",
        label = reason.label()
    )
}
