//! Formatting options and configuration.

use crate::scan::ImageMode;

/// Options for formatting a page batch.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// How embedded image data is represented in output text
    pub image_mode: ImageMode,

    /// Whether to process batch pages in parallel
    pub parallel: bool,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image mode.
    pub fn with_image_mode(mut self, mode: ImageMode) -> Self {
        self.image_mode = mode;
        self
    }

    /// Keep inline image payloads in the output text.
    pub fn keep_images_inline(mut self) -> Self {
        self.image_mode = ImageMode::InlineKeep;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            image_mode: ImageMode::Reference,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.image_mode, ImageMode::Reference);
        assert!(options.parallel);
    }

    #[test]
    fn test_builder_chain() {
        let options = FormatOptions::new().keep_images_inline().sequential();
        assert_eq!(options.image_mode, ImageMode::InlineKeep);
        assert!(!options.parallel);
    }
}
