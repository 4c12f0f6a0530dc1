//! Textual table-block detection and structural pairing.

use super::pair_by_position;
use crate::error::{Error, Result};
use crate::model::{StructuralTable, Table};
use regex::Regex;

/// Detector for column-aligned Markdown table blocks.
///
/// A block is one-or-more `|...|` rows, a single separator row made of
/// `|`, `-`, `:`, and spaces, then one-or-more further `|...|` rows.
/// Every row must be newline-terminated.
pub struct TableScanner {
    block_regex: Regex,
}

impl TableScanner {
    /// Compile the table-block pattern.
    pub fn new() -> Result<Self> {
        let block_regex = Regex::new(r"(?:\|[^\n]*\|\n)+(?:\|[-:| ]*\|\n)(?:\|[^\n]*\|\n)+")
            .map_err(|e| Error::Extraction(e.to_string()))?;
        Ok(Self { block_regex })
    }

    /// Find textual table blocks in document order.
    pub fn find_blocks(&self, text: &str) -> Vec<String> {
        self.block_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Pair textual blocks with structural tables by position.
    ///
    /// Every structural entry yields exactly one output table; entries
    /// without a textual match at their position get `content: None`.
    pub fn reconcile(&self, text: &str, structural: &[StructuralTable]) -> Vec<Table> {
        let blocks = self.find_blocks(text);
        if blocks.len() != structural.len() {
            log::debug!(
                "table count mismatch: {} textual vs {} structural",
                blocks.len(),
                structural.len()
            );
        }
        pair_by_position(structural, blocks, |s, content| {
            Table::from_structural(s, content)
        })
    }
}
