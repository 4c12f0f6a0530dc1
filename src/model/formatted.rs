//! The assembled per-page result.

use super::PageElements;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata describing where a formatted page came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Path of the source document
    pub source_path: PathBuf,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Total number of pages in the source document
    pub page_count: u32,

    /// Character length of the final page text (post-rewrite)
    pub text_length: usize,
}

/// One fully annotated page: metadata, elements, the (possibly
/// rewritten) text, and the derived signals.
///
/// Created fresh per page by the assembler and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedPage {
    /// Page provenance and size
    pub metadata: PageMetadata,

    /// Annotated elements found on the page
    pub elements: PageElements,

    /// Final page text; in reference mode, inline Markdown images are
    /// replaced with `[IMAGE](<hash>)` tokens
    pub text: String,

    /// Token count of the final text
    pub tokens: usize,

    /// ISO 639-1 language code, or `None` when detection failed or the
    /// page is blank
    pub language: Option<String>,
}

impl FormattedPage {
    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
