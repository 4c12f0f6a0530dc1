//! Batch validation.

use crate::error::{Error, Result};
use crate::model::PageInput;

/// Validate a page batch before any other component touches it.
///
/// An empty batch is rejected. Shape errors (elements that are not page
/// records at all) cannot reach this point through the typed API; at the
/// JSON boundary they surface from
/// [`PageInput::batch_from_json`](crate::model::PageInput::batch_from_json)
/// as the same [`Error::Validation`] variant.
pub fn validate_batch(pages: &[PageInput]) -> Result<()> {
    if pages.is_empty() {
        return Err(Error::Validation("batch contains no pages".to_string()));
    }
    Ok(())
}
