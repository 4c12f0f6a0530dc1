//! Per-page assembly: the join point of the annotation pipeline.

use crate::detect::LanguageDetector;
use crate::error::{Error, Result};
use crate::model::{FormattedPage, PageElements, PageInput, PageMetadata};
use crate::scan::{ImageScanner, MarkdownScanner, TableScanner};
use crate::token::TokenCounter;

use super::FormatOptions;

/// Joins scanner output, table/image reconciliation, and the derived
/// signals into one [`FormattedPage`].
///
/// Stateless across pages: every call builds a fresh result from one
/// immutable input, so pages can be assembled concurrently.
pub(crate) struct PageAssembler<'a> {
    pub markdown: &'a MarkdownScanner,
    pub tables: &'a TableScanner,
    pub images: &'a ImageScanner,
    pub token_counter: &'a dyn TokenCounter,
    pub language_detector: &'a dyn LanguageDetector,
    pub options: &'a FormatOptions,
}

impl PageAssembler<'_> {
    /// Assemble one page, wrapping any failure with page context.
    pub fn assemble(&self, input: &PageInput) -> Result<FormattedPage> {
        self.assemble_inner(input)
            .map_err(|e| e.on_page(&input.source_path, input.page_number))
    }

    fn assemble_inner(&self, input: &PageInput) -> Result<FormattedPage> {
        let markdown = self.markdown.scan(&input.text);
        let tables = self.tables.reconcile(&input.text, &input.tables);

        // The image pass may rewrite the text; everything measured below
        // must see the rewritten instance.
        let (images, text) =
            self.images
                .reconcile(&input.text, &input.images, self.options.image_mode);

        let tokens = self
            .token_counter
            .count(&text)
            .map_err(|e| Error::Assembly(format!("token counting failed: {e}")))?;

        let language = if text.trim().is_empty() {
            None
        } else {
            match self.language_detector.identify(&text) {
                Ok(code) => Some(code),
                Err(e) => {
                    log::warn!(
                        "language detection failed on page {} of '{}': {}",
                        input.page_number,
                        input.source_path.display(),
                        e
                    );
                    None
                }
            }
        };

        Ok(FormattedPage {
            metadata: PageMetadata {
                source_path: input.source_path.clone(),
                page_number: input.page_number,
                page_count: input.page_count,
                text_length: text.chars().count(),
            },
            elements: PageElements {
                tables,
                images,
                titles: markdown.titles,
                lists: markdown.lists,
                links: markdown.links,
            },
            text,
            tokens,
            language,
        })
    }
}
