//! Token counting collaborator seam.
//!
//! Token counts feed billing and length estimation downstream, so
//! counting is not best-effort: a counter failure aborts page assembly.
//! The built-in counter is a deterministic chars-per-token estimator;
//! callers with access to a real tokenizer service plug it in through
//! [`TokenCounter`].

use crate::error::Result;

/// Counts text units for billing/length estimation.
///
/// Implementations must be deterministic and pure: the same text always
/// yields the same count.
pub trait TokenCounter: Send + Sync {
    /// Count tokens in the given text.
    fn count(&self, text: &str) -> Result<usize>;
}

/// Multilingual chars-per-token estimator.
///
/// English and other Latin-script text averages ~4 characters per
/// token, CJK ~2 characters, Arabic ~5. Pure ASCII takes an O(1)
/// fast path.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenCounter;

impl HeuristicTokenCounter {
    /// Create a new heuristic counter.
    pub fn new() -> Self {
        Self
    }

    fn estimate(text: &str) -> usize {
        // Blank pages carry no tokens; the length estimate below would
        // otherwise bill their whitespace.
        if text.trim().is_empty() {
            return 0;
        }

        if text.is_ascii() {
            return text.len() / 4;
        }

        let mut char_count = 0;
        let mut cjk_count = 0;
        let mut arabic_count = 0;

        for c in text.chars() {
            char_count += 1;
            if is_cjk_char(c) {
                cjk_count += 1;
            } else if is_arabic_char(c) {
                arabic_count += 1;
            }
        }

        if cjk_count > 0 {
            // Mixed CJK: CJK chars ~2 chars/token, others ~4 chars/token
            let non_cjk = char_count - cjk_count;
            (cjk_count / 2) + (non_cjk / 4)
        } else if arabic_count > char_count / 2 {
            char_count / 5
        } else {
            char_count / 4
        }
    }
}

impl TokenCounter for HeuristicTokenCounter {
    fn count(&self, text: &str) -> Result<usize> {
        Ok(Self::estimate(text))
    }
}

#[inline]
fn is_cjk_char(c: char) -> bool {
    let code = c as u32;
    (0x4E00..=0x9FFF).contains(&code) // CJK Unified Ideographs
        || (0x3040..=0x309F).contains(&code) // Hiragana
        || (0x30A0..=0x30FF).contains(&code) // Katakana
        || (0xAC00..=0xD7AF).contains(&code) // Hangul
}

#[inline]
fn is_arabic_char(c: char) -> bool {
    let code = c as u32;
    (0x0600..=0x06FF).contains(&code)
        || (0x0750..=0x077F).contains(&code)
        || (0x08A0..=0x08FF).contains(&code)
        || (0xFB50..=0xFDFF).contains(&code)
        || (0xFE70..=0xFEFF).contains(&code)
}
