//! Language identification collaborator seam.
//!
//! Language detection is best-effort everywhere in this crate: the
//! assembler invokes the detector only on non-blank text and treats any
//! failure as "unknown". The built-in detector classifies by Unicode
//! script ranges; callers with a statistical language identifier plug it
//! in through [`LanguageDetector`].

use crate::error::{Error, Result};

/// Identifies the language of a text sample.
pub trait LanguageDetector: Send + Sync {
    /// Return an ISO 639-1 language code for the text.
    ///
    /// May fail on short or ambiguous samples; callers are expected to
    /// treat any failure as "unknown".
    fn identify(&self, text: &str) -> Result<String>;
}

/// Script-range language detector.
///
/// Classifies by the dominant Unicode script among alphabetic
/// characters. Latin-script text is reported as English; distinguishing
/// Latin-script languages needs a statistical model and is out of reach
/// for a script census.
#[derive(Debug, Clone, Copy)]
pub struct ScriptLanguageDetector {
    min_chars: usize,
}

impl ScriptLanguageDetector {
    /// Create a detector requiring at least `min_chars` alphabetic
    /// characters before committing to a classification.
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

impl Default for ScriptLanguageDetector {
    fn default() -> Self {
        Self::new(20)
    }
}

impl LanguageDetector for ScriptLanguageDetector {
    fn identify(&self, text: &str) -> Result<String> {
        let mut counts = ScriptCounts::default();
        for c in text.chars() {
            counts.tally(c);
        }

        if counts.total < self.min_chars {
            return Err(Error::LanguageDetect(format!(
                "sample too short: {} alphabetic chars, need {}",
                counts.total, self.min_chars
            )));
        }

        counts
            .dominant()
            .map(str::to_string)
            .ok_or_else(|| Error::LanguageDetect("no dominant script".to_string()))
    }
}

#[derive(Debug, Default)]
struct ScriptCounts {
    total: usize,
    hangul: usize,
    kana: usize,
    han: usize,
    arabic: usize,
    hebrew: usize,
    cyrillic: usize,
    greek: usize,
    thai: usize,
    devanagari: usize,
    latin: usize,
}

impl ScriptCounts {
    fn tally(&mut self, c: char) {
        let code = c as u32;
        let bucket = match code {
            0xAC00..=0xD7AF => &mut self.hangul,
            0x3040..=0x30FF => &mut self.kana,
            0x4E00..=0x9FFF => &mut self.han,
            0x0600..=0x06FF | 0x0750..=0x077F => &mut self.arabic,
            0x0590..=0x05FF => &mut self.hebrew,
            0x0400..=0x04FF => &mut self.cyrillic,
            0x0370..=0x03FF => &mut self.greek,
            0x0E00..=0x0E7F => &mut self.thai,
            0x0900..=0x097F => &mut self.devanagari,
            _ if c.is_ascii_alphabetic() || (0x00C0..=0x024F).contains(&code) => &mut self.latin,
            _ => return,
        };
        *bucket += 1;
        self.total += 1;
    }

    /// Pick a language for the dominant script, if one clearly leads.
    fn dominant(&self) -> Option<&'static str> {
        // Kana anywhere means Japanese even when Han ideographs dominate.
        if self.kana > 0 && self.kana + self.han > self.total / 2 {
            return Some("ja");
        }

        let buckets: [(usize, &'static str); 9] = [
            (self.hangul, "ko"),
            (self.han, "zh"),
            (self.arabic, "ar"),
            (self.hebrew, "he"),
            (self.cyrillic, "ru"),
            (self.greek, "el"),
            (self.thai, "th"),
            (self.devanagari, "hi"),
            (self.latin, "en"),
        ];
        let &(count, code) = buckets.iter().max_by_key(|(count, _)| *count)?;
        if count * 2 > self.total {
            Some(code)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> ScriptLanguageDetector {
        ScriptLanguageDetector::default()
    }

    #[test]
    fn test_detect_english() {
        let text = "The annotation engine reconciles structural and textual detections.";
        assert_eq!(detector().identify(text).unwrap(), "en");
    }

    #[test]
    fn test_detect_korean() {
        let text = "문서의 각 페이지에서 제목과 목록과 링크를 추출합니다";
        assert_eq!(detector().identify(text).unwrap(), "ko");
    }

    #[test]
    fn test_detect_japanese_kana_over_han() {
        let text = "この文書は日本語で書かれていますので注意してください";
        assert_eq!(detector().identify(text).unwrap(), "ja");
    }

    #[test]
    fn test_detect_russian() {
        let text = "Этот документ написан на русском языке для проверки";
        assert_eq!(detector().identify(text).unwrap(), "ru");
    }

    #[test]
    fn test_short_sample_fails() {
        let err = detector().identify("hi").unwrap_err();
        assert!(matches!(err, Error::LanguageDetect(_)));
    }

    #[test]
    fn test_digits_only_fails() {
        let err = detector().identify("1234567890 2345 98765 42 17").unwrap_err();
        assert!(matches!(err, Error::LanguageDetect(_)));
    }

    #[test]
    fn test_custom_threshold() {
        let detector = ScriptLanguageDetector::new(3);
        assert_eq!(detector.identify("abc").unwrap(), "en");
    }
}
