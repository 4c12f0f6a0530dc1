//! # pagemark
//!
//! Per-page Markdown annotation library for Rust.
//!
//! This library enriches per-page extracted document text with structured
//! annotations: detected titles, list items, hyperlinks, tables, and
//! images, plus derived signals (token count, language). It consumes the
//! output of a document extraction engine — raw per-page Markdown and the
//! structural elements (bounding boxes, row/column counts, pixel
//! dimensions) detected alongside it — re-discovers those elements inside
//! the text, and reconciles the two representations positionally.
//!
//! ## Quick Start
//!
//! ```
//! use pagemark::{format_pages, PageInput};
//!
//! fn main() -> pagemark::Result<()> {
//!     let pages = vec![PageInput::new(
//!         "report.pdf",
//!         1,
//!         1,
//!         "# Summary\n\n- finding one\n\nSee [details](http://example.test).",
//!     )];
//!
//!     let formatted = format_pages(&pages)?;
//!     assert_eq!(formatted[0].elements.titles, vec!["# Summary"]);
//!     assert_eq!(formatted[0].elements.lists.len(), 1);
//!     assert_eq!(formatted[0].elements.links.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markdown structure scan**: titles, list items, links
//! - **Table reconciliation**: textual blocks paired with structural detections
//! - **Image content addressing**: MD5 hashes for embedded payloads, with
//!   reference-token rewrite or inline-keep modes
//! - **Derived signals**: token count and best-effort language detection
//! - **Parallel processing**: uses Rayon for multi-page batches

pub mod detect;
pub mod error;
pub mod format;
pub mod model;
pub mod scan;
pub mod token;

// Re-export commonly used types
pub use detect::{LanguageDetector, ScriptLanguageDetector};
pub use error::{Error, Result};
pub use format::{validate_batch, FormatOptions};
pub use model::{
    BoundingBox, FormattedPage, Image, Link, PageBatch, PageElements, PageInput, PageMetadata,
    StructuralImage, StructuralTable, Table,
};
pub use scan::{
    content_hash, pair_by_position, ImageMode, ImageScanner, MarkdownElements, MarkdownScanner,
    TableScanner,
};
pub use token::{HeuristicTokenCounter, TokenCounter};

use format::PageAssembler;
use rayon::prelude::*;
use std::sync::Arc;

/// Format a batch of pages with default options.
///
/// # Example
///
/// ```
/// use pagemark::{format_pages, PageInput};
///
/// let pages = vec![PageInput::new("doc.pdf", 1, 1, "# Title")];
/// let formatted = format_pages(&pages).unwrap();
/// assert_eq!(formatted.len(), 1);
/// ```
pub fn format_pages(pages: &[PageInput]) -> Result<Vec<FormattedPage>> {
    Formatter::new()?.format_batch(pages)
}

/// Format a batch of pages with custom options.
///
/// # Example
///
/// ```
/// use pagemark::{format_pages_with_options, FormatOptions, PageInput};
///
/// let pages = vec![PageInput::new("doc.pdf", 1, 1, "# Title")];
/// let options = FormatOptions::new().keep_images_inline().sequential();
/// let formatted = format_pages_with_options(&pages, options).unwrap();
/// assert_eq!(formatted.len(), 1);
/// ```
pub fn format_pages_with_options(
    pages: &[PageInput],
    options: FormatOptions,
) -> Result<Vec<FormattedPage>> {
    Formatter::with_options(options)?.format_batch(pages)
}

/// Format an extraction-engine JSON batch and return the results as
/// pretty-printed JSON.
///
/// Accepts a bare page object or an array of page objects, the two
/// shapes upstream engines emit.
pub fn format_json(json: &str, options: FormatOptions) -> Result<String> {
    let pages = PageInput::batch_from_json(json)?;
    let formatted = Formatter::with_options(options)?.format_batch(&pages)?;
    Ok(serde_json::to_string_pretty(&formatted)?)
}

/// Page formatter with configurable collaborators.
///
/// Holds the compiled scanners plus the token-counting and
/// language-detection services; reusable across any number of batches.
///
/// # Example
///
/// ```
/// use pagemark::{Formatter, PageInput};
///
/// let formatter = Formatter::new()?.keep_images_inline().sequential();
/// let page = formatter.format_page(&PageInput::new("doc.pdf", 1, 1, "# Title"))?;
/// assert_eq!(page.tokens, 1);
/// # Ok::<(), pagemark::Error>(())
/// ```
pub struct Formatter {
    options: FormatOptions,
    markdown: MarkdownScanner,
    tables: TableScanner,
    images: ImageScanner,
    token_counter: Arc<dyn TokenCounter>,
    language_detector: Arc<dyn LanguageDetector>,
}

impl Formatter {
    /// Create a formatter with default options and collaborators.
    ///
    /// Fails only if a scan pattern does not compile.
    pub fn new() -> Result<Self> {
        Self::with_options(FormatOptions::default())
    }

    /// Create a formatter with the given options.
    pub fn with_options(options: FormatOptions) -> Result<Self> {
        Ok(Self {
            options,
            markdown: MarkdownScanner::new()?,
            tables: TableScanner::new()?,
            images: ImageScanner::new()?,
            token_counter: Arc::new(HeuristicTokenCounter),
            language_detector: Arc::new(ScriptLanguageDetector::default()),
        })
    }

    /// Set the image mode.
    pub fn with_image_mode(mut self, mode: ImageMode) -> Self {
        self.options = self.options.with_image_mode(mode);
        self
    }

    /// Keep inline image payloads in the output text.
    pub fn keep_images_inline(mut self) -> Self {
        self.options = self.options.keep_images_inline();
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Replace the token-counting service.
    pub fn with_token_counter(mut self, counter: Arc<dyn TokenCounter>) -> Self {
        self.token_counter = counter;
        self
    }

    /// Replace the language-detection service.
    pub fn with_language_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.language_detector = detector;
        self
    }

    /// Get the active options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a single page.
    pub fn format_page(&self, page: &PageInput) -> Result<FormattedPage> {
        self.assembler().assemble(page)
    }

    /// Format a batch of pages.
    ///
    /// The batch is validated first; one failing page fails the whole
    /// call, with the error carrying that page's source path and number.
    /// Output order mirrors input order even under parallel processing.
    pub fn format_batch(&self, pages: &[PageInput]) -> Result<Vec<FormattedPage>> {
        validate_batch(pages)?;
        log::debug!(
            "formatting batch of {} pages (parallel: {})",
            pages.len(),
            self.options.parallel
        );

        let assembler = self.assembler();
        if self.options.parallel && pages.len() > 1 {
            pages
                .par_iter()
                .map(|page| assembler.assemble(page))
                .collect()
        } else {
            pages.iter().map(|page| assembler.assemble(page)).collect()
        }
    }

    fn assembler(&self) -> PageAssembler<'_> {
        PageAssembler {
            markdown: &self.markdown,
            tables: &self.tables,
            images: &self.images,
            token_counter: self.token_counter.as_ref(),
            language_detector: self.language_detector.as_ref(),
            options: &self.options,
        }
    }
}
