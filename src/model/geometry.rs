//! Page geometry types.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in page coordinates.
///
/// Serialized as the 4-element array `[x0, y0, x1, y1]` the extraction
/// engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a bounding box from its corner coordinates.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Area of the box.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let bbox = BoundingBox::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 50.0);
        assert_eq!(bbox.area(), 5000.0);
    }

    #[test]
    fn test_serializes_as_array() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");

        let back: BoundingBox = serde_json::from_str("[1.0,2.0,3.0,4.0]").unwrap();
        assert_eq!(back, bbox);
    }
}
