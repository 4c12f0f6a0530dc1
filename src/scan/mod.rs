//! Textual detectors that re-discover page elements inside raw text.
//!
//! The upstream extraction engine reports tables and images by geometry
//! only; this module locates the corresponding Markdown blocks and inline
//! payloads by pattern matching, then pairs the two representations
//! positionally. Titles, lists, and links have no structural counterpart
//! and are scanned directly.

mod image;
mod markdown;
mod table;

pub use image::{content_hash, ImageMode, ImageScanner};
pub use markdown::{MarkdownElements, MarkdownScanner};
pub use table::TableScanner;

/// Pair structurally detected elements with textual matches by position.
///
/// The i-th structural entry receives the i-th textual match, or `None`
/// when fewer textual matches exist; extra textual matches are discarded.
/// The two lists come from independent detectors with no shared key, so
/// mismatched ordering misassigns content — an accepted limitation of
/// positional pairing. All pairing in this crate goes through this one
/// function so a keyed strategy (e.g., geometry overlap) could replace it
/// without touching callers.
pub fn pair_by_position<S, T, O>(
    structural: &[S],
    textual: Vec<T>,
    mut enrich: impl FnMut(&S, Option<T>) -> O,
) -> Vec<O> {
    let mut textual = textual.into_iter();
    structural.iter().map(|s| enrich(s, textual.next())).collect()
}
