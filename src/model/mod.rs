//! Data model for page annotation.
//!
//! Input types mirror the shape the upstream extraction engine emits
//! (per-page text plus structural element lists with geometry); output
//! types carry the same elements enriched with textual content, hashes,
//! and derived signals.

mod elements;
mod formatted;
mod geometry;
mod page;

pub use elements::{Image, Link, PageElements, Table};
pub use formatted::{FormattedPage, PageMetadata};
pub use geometry::BoundingBox;
pub use page::{PageBatch, PageInput, StructuralImage, StructuralTable};
