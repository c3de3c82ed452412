//! Deterministic, exception-free rendition of the retention policies

use crate::policy::{Direction, RetentionPolicy};
use crate::transform::{TextTransform, TransformError};

/// Applies the strip side of each policy exactly, with no oracle involved.
///
/// The name/equation exceptions require judgment this transform does not
/// attempt: a word is kept intact only when its final character is not a
/// letter (digits and punctuation shield the whole word). Restoration is
/// refused outright, since the elided characters are gone.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTransform;

impl RuleTransform {
    pub fn new() -> Self {
        Self
    }

    /// Drop the final letter of each word, preserving all whitespace.
    pub fn strip_letters(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word = String::new();
        for ch in text.chars() {
            if ch.is_whitespace() {
                push_word(&mut out, &word);
                word.clear();
                out.push(ch);
            } else {
                word.push(ch);
            }
        }
        push_word(&mut out, &word);
        out
    }

    /// Drop every whitespace run between words.
    pub fn strip_spaces(text: &str) -> String {
        text.split_whitespace().collect()
    }
}

fn push_word(out: &mut String, word: &str) {
    match word.chars().last() {
        Some(last) if last.is_alphabetic() => {
            out.push_str(&word[..word.len() - last.len_utf8()]);
        }
        _ => out.push_str(word),
    }
}

impl TextTransform for RuleTransform {
    fn transform(
        &self,
        policy: RetentionPolicy,
        direction: Direction,
        text: &str,
    ) -> Result<String, TransformError> {
        if direction == Direction::Restore {
            return Err(TransformError::RestoreUnsupported);
        }
        Ok(match policy {
            RetentionPolicy::Letter => Self::strip_letters(text),
            RetentionPolicy::Space => Self::strip_spaces(text),
            RetentionPolicy::Combined => Self::strip_spaces(&Self::strip_letters(text)),
        })
    }
}
