//! Output-side annotated element types.

use super::{BoundingBox, StructuralImage, StructuralTable};
use serde::{Deserialize, Serialize};

/// A hyperlink found in the page text.
///
/// Bracket-style Markdown links keep their display text; bare autolinks
/// use the URL itself as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display text of the link
    pub text: String,

    /// Link target URL
    pub url: String,
}

impl Link {
    /// Create a link with distinct display text and URL.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Create a bare autolink whose display text is the URL itself.
    pub fn bare(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            text: url.clone(),
            url,
        }
    }
}

/// A structurally detected table enriched with its textual block.
///
/// `content` is `None` when no textual match existed at this table's
/// position; counts between the two detectors are allowed to disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Bounding box on the page
    pub bbox: BoundingBox,

    /// Number of rows detected
    pub rows: u32,

    /// Number of columns detected
    pub columns: u32,

    /// The matched Markdown table block, if any
    pub content: Option<String>,
}

impl Table {
    /// Enrich a structural table with an optional textual block.
    pub fn from_structural(structural: &StructuralTable, content: Option<String>) -> Self {
        Self {
            bbox: structural.bbox,
            rows: structural.rows,
            columns: structural.columns,
            content,
        }
    }

    /// Check whether a textual block was matched for this table.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

/// A structurally detected image enriched with its inline payload and
/// content hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image number on the page (1-indexed)
    pub number: u32,

    /// Bounding box on the page
    pub bbox: BoundingBox,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Stored data-URI payload, if a textual match existed.
    ///
    /// Truncated at the first `=` (inclusive) regardless of image mode;
    /// the full payload survives only in the page text, and only in
    /// inline-keep mode.
    pub payload: Option<String>,

    /// MD5 hex digest of the full matched payload, if any
    pub content_hash: Option<String>,
}

impl Image {
    /// Enrich a structural image with payload and hash.
    pub fn from_structural(
        structural: &StructuralImage,
        payload: Option<String>,
        content_hash: Option<String>,
    ) -> Self {
        Self {
            number: structural.number,
            bbox: structural.bbox,
            width: structural.width,
            height: structural.height,
            payload,
            content_hash,
        }
    }

    /// Check whether a textual payload was matched for this image.
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

/// All annotated elements found on one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageElements {
    /// Tables, one per structural entry, in structural order
    pub tables: Vec<Table>,

    /// Images, one per structural entry, in structural order
    pub images: Vec<Image>,

    /// Title lines (`#` through `######`), in document order
    pub titles: Vec<String>,

    /// List item lines, ordered items before unordered items
    pub lists: Vec<String>,

    /// Hyperlinks, Markdown-style links before autolinks
    pub links: Vec<Link>,
}

impl PageElements {
    /// Total number of annotated elements on the page.
    pub fn count(&self) -> usize {
        self.tables.len() + self.images.len() + self.titles.len() + self.lists.len()
            + self.links.len()
    }

    /// Check if no elements were found.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
