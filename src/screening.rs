//! Flags images with too much embedded text (flyers, price lists).
//!
//! OCR runs outside the curator; this module only sees its text output.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-image entry of `image_text_analysis.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub filename: String,
    pub word_count: usize,
    pub text_preview: String,
    pub will_remove: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningReport {
    /// One entry per image, in identifier order.
    pub analysis: Vec<TextAnalysis>,
    /// Flagged identifiers, sorted.
    pub removals: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextScreen {
    max_words: usize,
    preview_chars: usize,
}

impl TextScreen {
    pub fn new(max_words: usize, preview_chars: usize) -> Self {
        Self {
            max_words,
            preview_chars,
        }
    }

    /// Whitespace-separated words longer than one character. Stray letters
    /// and single digits are usually OCR noise.
    pub fn meaningful_word_count(text: &str) -> usize {
        text.split_whitespace()
            .filter(|word| word.chars().count() > 1)
            .count()
    }

    pub fn should_remove(&self, text: &str) -> bool {
        Self::meaningful_word_count(text) > self.max_words
    }

    pub fn analyze(&self, filename: &str, text: &str) -> TextAnalysis {
        let word_count = Self::meaningful_word_count(text);
        TextAnalysis {
            filename: filename.to_string(),
            word_count,
            text_preview: text.chars().take(self.preview_chars).collect(),
            will_remove: word_count > self.max_words,
        }
    }

    pub fn screen(&self, ocr_text: &BTreeMap<String, String>) -> ScreeningReport {
        let analysis: Vec<TextAnalysis> = ocr_text
            .iter()
            .map(|(filename, text)| self.analyze(filename, text))
            .collect();
        let removals = analysis
            .iter()
            .filter(|entry| entry.will_remove)
            .map(|entry| entry.filename.clone())
            .collect();

        ScreeningReport { analysis, removals }
    }
}
