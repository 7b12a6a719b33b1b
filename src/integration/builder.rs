//! Builder for creating bounding boxes from various detector output formats.

use crate::error::Result;
use crate::tracker::BoundingBox;

/// Builder for creating `BoundingBox` values from various input formats.
///
/// Stores corners internally so every format converts the same way.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl BoundingBoxBuilder {
    /// Create a new bounding box builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    /// Build the final `BoundingBox` without validation.
    pub fn build(self) -> BoundingBox {
        BoundingBox::from_tlbr(self.x1, self.y1, self.x2, self.y2)
    }

    /// Build the box, failing on non-finite coordinates or inverted corners.
    pub fn try_build(self) -> Result<BoundingBox> {
        let bbox = self.build();
        BoundingBox::validated(bbox.x, bbox.y, bbox.width, bbox.height)
    }
}
