use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

/// Word ceiling applied when the length input is empty or invalid.
pub const DEFAULT_SUMMARY_LENGTH: u32 = 150;

/// Display languages the summarizer can be asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Latvian,
}

impl Language {
    /// Name as embedded in the completion prompt.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Latvian => "Latvian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which presentation strategy renders the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PresenterKind {
    /// Injected overlay in the page itself.
    #[default]
    Overlay,
    /// Separate popup window.
    Popup,
}

// [0-9] rather than \d: the regex crate's \d also matches non-ASCII digits,
// which u32 parsing would then reject.
static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("static regex compile"));

/// Raw word-ceiling input with keystroke-level filtering.
///
/// Only empty or digits-only content is ever stored; anything else leaves the
/// previous value untouched. Resolution falls back silently to
/// [`DEFAULT_SUMMARY_LENGTH`] for empty or non-positive input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthInput {
    raw: String,
}

impl LengthInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a whole string, applying the same filter as typed input.
    /// Invalid input yields the empty (default-resolving) state.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let mut input = Self::new();
        input.set(raw);
        input
    }

    /// Replace the stored value if the candidate passes the filter.
    pub fn set(&mut self, candidate: &str) {
        if candidate.is_empty() || DIGITS_ONLY.is_match(candidate) {
            self.raw = candidate.to_string();
        }
    }

    /// Append one keystroke; non-digit characters are rejected.
    pub fn push(&mut self, c: char) {
        let mut candidate = self.raw.clone();
        candidate.push(c);
        self.set(&candidate);
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Resolve the word ceiling: the parsed value when positive (saturating
    /// at `u32::MAX`), else the default. Never an error.
    #[must_use]
    pub fn resolve(&self) -> u32 {
        if self.raw.is_empty() {
            return DEFAULT_SUMMARY_LENGTH;
        }
        match self.raw.parse::<u64>() {
            Ok(0) => DEFAULT_SUMMARY_LENGTH,
            Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
            // the stored content is digits-only, so a failed parse means
            // the value overflows u64
            Err(_) => u32::MAX,
        }
    }

    /// Whether the resolved ceiling is the default (drives the indicator).
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.resolve() == DEFAULT_SUMMARY_LENGTH
    }
}

/// Visible text extracted from a page. Non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText(String);

impl PageText {
    /// Returns `None` for text that is empty after trimming.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Character count, for user-facing output; [`len`](Self::len) is bytes.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; a `PageText` is non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// UI selection state owned by the orchestrator for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// `None` until the user has chosen a language.
    pub language: Option<Language>,
    pub length: LengthInput,
    pub presenter: PresenterKind,
}

/// One completion request, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub source_text: PageText,
    pub language: Language,
    pub max_words: u32,
}

impl SummaryRequest {
    /// Combine extracted text with the session options. Fails when no
    /// language has been selected yet.
    pub fn new(source_text: PageText, options: &SessionOptions) -> Result<Self, PipelineError> {
        let language = options.language.ok_or(PipelineError::LanguageNotSelected)?;
        Ok(Self {
            source_text,
            language,
            max_words: options.length.resolve(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_input_rejects_non_digit_keystrokes() {
        let mut input = LengthInput::new();
        input.push('8');
        input.push('x');
        input.push('0');
        input.push('-');
        assert_eq!(input.raw(), "80");
    }

    #[test]
    fn length_input_set_keeps_previous_value_on_invalid() {
        let mut input = LengthInput::from_raw("42");
        input.set("4a2");
        assert_eq!(input.raw(), "42");
        input.set("");
        assert_eq!(input.raw(), "");
    }

    #[test]
    fn page_text_requires_visible_content() {
        assert!(PageText::new("  \n\t ").is_none());
        assert!(PageText::new("hello").is_some());
    }

    #[test]
    fn page_text_counts_characters_not_bytes() {
        let text = PageText::new("Résumé").unwrap();
        assert_eq!(text.char_count(), 6);
        assert_eq!(text.len(), 8);
    }

    #[test]
    fn summary_request_requires_language() {
        let text = PageText::new("body").unwrap();
        let options = SessionOptions::default();
        assert!(matches!(
            SummaryRequest::new(text, &options),
            Err(PipelineError::LanguageNotSelected)
        ));
    }
}
