//! Input-side page types produced by the upstream extraction engine.

use super::BoundingBox;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A structurally detected table on a page.
///
/// Positional only: the extraction engine locates tables by geometry and
/// reports their shape, but carries no textual content. The textual block
/// is recovered later by [`crate::scan::TableScanner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralTable {
    /// Bounding box on the page, in page coordinates
    pub bbox: BoundingBox,

    /// Number of rows detected
    pub rows: u32,

    /// Number of columns detected
    pub columns: u32,
}

/// A structurally detected image on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralImage {
    /// Image number on the page (1-indexed, extraction-engine assigned)
    pub number: u32,

    /// Bounding box on the page, in page coordinates
    pub bbox: BoundingBox,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

/// One page of extraction-engine output: raw Markdown text plus the
/// structural element lists detected alongside it.
///
/// Immutable once handed to the formatter; every output record is built
/// fresh from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInput {
    /// Path of the source document
    pub source_path: PathBuf,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Total number of pages in the source document
    pub page_count: u32,

    /// Raw per-page text, with tables and images embedded as Markdown
    pub text: String,

    /// Structurally detected tables, in detection order
    #[serde(default)]
    pub tables: Vec<StructuralTable>,

    /// Structurally detected images, in detection order
    #[serde(default)]
    pub images: Vec<StructuralImage>,
}

impl PageInput {
    /// Create a page input with no structural elements.
    pub fn new(
        source_path: impl Into<PathBuf>,
        page_number: u32,
        page_count: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            page_number,
            page_count,
            text: text.into(),
            tables: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Set the structural tables and return self.
    pub fn with_tables(mut self, tables: Vec<StructuralTable>) -> Self {
        self.tables = tables;
        self
    }

    /// Set the structural images and return self.
    pub fn with_images(mut self, images: Vec<StructuralImage>) -> Self {
        self.images = images;
        self
    }

    /// Check if the page text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Parse an extraction-engine batch from JSON.
    ///
    /// The engine emits either a single page object or an array of them;
    /// both are accepted and normalized to a vector. Malformed shapes are
    /// reported as [`Error::Validation`](crate::error::Error::Validation).
    pub fn batch_from_json(json: &str) -> crate::error::Result<Vec<PageInput>> {
        let batch: PageBatch = serde_json::from_str(json)
            .map_err(|e| crate::error::Error::Validation(format!("not a page batch: {e}")))?;
        Ok(batch.into_pages())
    }
}

/// Extraction-engine output: a bare page record or a sequence of them.
///
/// Upstream engines emit a single object for one-page documents and an
/// array otherwise; this normalizes both to the same shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageBatch {
    /// A single page record
    Single(PageInput),

    /// A sequence of page records
    Many(Vec<PageInput>),
}

impl PageBatch {
    /// Normalize to a vector of pages.
    pub fn into_pages(self) -> Vec<PageInput> {
        match self {
            PageBatch::Single(page) => vec![page],
            PageBatch::Many(pages) => pages,
        }
    }

    /// Number of pages in the batch.
    pub fn len(&self) -> usize {
        match self {
            PageBatch::Single(_) => 1,
            PageBatch::Many(pages) => pages.len(),
        }
    }

    /// Check if the batch contains no pages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_input_new() {
        let page = PageInput::new("doc.pdf", 1, 3, "# Hello");
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_count, 3);
        assert!(page.tables.is_empty());
        assert!(page.images.is_empty());
        assert!(!page.is_blank());
    }

    #[test]
    fn test_page_input_blank() {
        let page = PageInput::new("doc.pdf", 1, 1, "  \n\t ");
        assert!(page.is_blank());
    }

    #[test]
    fn test_batch_from_json_single_object() {
        let json = r##"{
            "source_path": "doc.pdf",
            "page_number": 1,
            "page_count": 1,
            "text": "# Title"
        }"##;
        let pages = PageInput::batch_from_json(json).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "# Title");
    }

    #[test]
    fn test_batch_from_json_array() {
        let json = r#"[
            {"source_path": "doc.pdf", "page_number": 1, "page_count": 2, "text": "a"},
            {"source_path": "doc.pdf", "page_number": 2, "page_count": 2, "text": "b"}
        ]"#;
        let pages = PageInput::batch_from_json(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].page_number, 2);
    }

    #[test]
    fn test_batch_from_json_missing_lists_default_empty() {
        let json = r#"{"source_path": "x.pdf", "page_number": 1, "page_count": 1, "text": ""}"#;
        let pages = PageInput::batch_from_json(json).unwrap();
        assert!(pages[0].tables.is_empty());
        assert!(pages[0].images.is_empty());
    }

    #[test]
    fn test_batch_from_json_malformed_is_validation() {
        let err = PageInput::batch_from_json(r#"{"page_number": "one"}"#).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_structural_table_roundtrip() {
        let table = StructuralTable {
            bbox: BoundingBox::new(10.0, 20.0, 300.0, 120.0),
            rows: 4,
            columns: 3,
        };
        let json = serde_json::to_string(&table).unwrap();
        let back: StructuralTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
