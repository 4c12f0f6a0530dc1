//! Inline image detection, content addressing, and text rewrite.

use super::pair_by_position;
use crate::error::{Error, Result};
use crate::model::{Image, StructuralImage};
use md5::{Digest, Md5};
use regex::{NoExpand, Regex};

/// Policy for representing embedded image data in the output text.
///
/// Global per formatting call, never per image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageMode {
    /// Replace Markdown-syntax inline images with `[IMAGE](<hash>)`
    /// reference tokens. HTML `<img>` tags are left untouched.
    #[default]
    Reference,

    /// Keep inline payloads in the output text unchanged.
    InlineKeep,
}

/// Detector for embedded base64 image payloads.
///
/// Matches Markdown image syntax and HTML `<img>` tags carrying
/// `data:image/...;base64,...` sources; the payload is whichever
/// alternative matched.
pub struct ImageScanner {
    image_regex: Regex,
    rewrite_regex: Regex,
}

impl ImageScanner {
    /// Compile the image patterns.
    pub fn new() -> Result<Self> {
        let image_regex = compile(
            r#"(?:!\[.*?\]\((data:image/[^;]+;base64,[^)]+)\)|<img[^>]*src="(data:image/[^;]+;base64,[^"]+)"[^>]*>)"#,
        )?;
        // The rewrite targets Markdown syntax only; alt text may span
        // lines, hence the (?s) flag.
        let rewrite_regex = compile(r"(?s)!\[.*?\]\((data:image/[^;]+;base64,[^)]+)\)")?;
        Ok(Self {
            image_regex,
            rewrite_regex,
        })
    }

    /// Find embedded payloads in document order.
    pub fn find_payloads(&self, text: &str) -> Vec<String> {
        self.image_regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Pair payloads with structural images by position, hash them, and
    /// apply the image-mode text policy.
    ///
    /// Returns the enriched images together with the (possibly
    /// rewritten) page text. In [`ImageMode::Reference`], each paired
    /// non-empty payload triggers a text-wide substitution of every
    /// remaining Markdown-syntax inline image with `[IMAGE](<hash>)`;
    /// in practice the first paired payload's hash claims them all. The
    /// stored payload is truncated at the first `=` in both modes.
    pub fn reconcile(
        &self,
        text: &str,
        structural: &[StructuralImage],
        mode: ImageMode,
    ) -> (Vec<Image>, String) {
        let payloads = self.find_payloads(text);
        if payloads.len() != structural.len() {
            log::debug!(
                "image count mismatch: {} textual vs {} structural",
                payloads.len(),
                structural.len()
            );
        }

        let mut rewritten = text.to_string();
        let images = pair_by_position(structural, payloads, |s, payload| {
            match payload.filter(|p| !p.is_empty()) {
                Some(payload) => {
                    let hash = content_hash(&payload);
                    if mode == ImageMode::Reference {
                        let token = format!("[IMAGE]({hash})");
                        rewritten = self
                            .rewrite_regex
                            .replace_all(&rewritten, NoExpand(&token))
                            .into_owned();
                    }
                    Image::from_structural(s, Some(truncate_payload(&payload)), Some(hash))
                }
                None => Image::from_structural(s, None, None),
            }
        });
        (images, rewritten)
    }
}

/// MD5 hex digest of an image payload string.
///
/// Deterministic: identical payloads always yield identical hashes.
pub fn content_hash(payload: &str) -> String {
    format!("{:x}", Md5::digest(payload.as_bytes()))
}

/// Truncate a stored payload to everything up to and including the
/// first `=`, appending one when the payload has none.
///
/// Not a semantically meaningful cut; kept byte-for-byte compatible
/// with the upstream consumers of this field.
fn truncate_payload(payload: &str) -> String {
    match payload.find('=') {
        Some(idx) => payload[..=idx].to_string(),
        None => format!("{payload}="),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Extraction(e.to_string()))
}
