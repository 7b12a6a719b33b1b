use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::tracker::centroid::Centroid;

/// Axis-aligned detection box in TLWH form.
///
/// Constructors for the other formats detectors commonly emit:
/// - TLBR: Top-Left X, Top-Left Y, Bottom-Right X, Bottom-Right Y
/// - XYWH: Center X, Center Y, Width, Height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the bounding box
    pub width: f32,
    /// Height of the bounding box
    pub height: f32,
}

impl BoundingBox {
    /// Create a new box from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Create a box from XYWH format (center x, center y, width, height).
    #[inline]
    pub fn from_xywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Build a box, refusing non-finite coordinates and negative extents.
    pub fn validated(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        let bbox = Self::new(x, y, width, height);
        match bbox.defect() {
            Some(reason) => Err(TrackerError::InvalidBoundingBox {
                x,
                y,
                width,
                height,
                reason,
            }),
            None => Ok(bbox),
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Integer midpoint of the box, truncated toward zero.
    ///
    /// Degenerate boxes are not checked: a negative extent yields a point
    /// outside the box and non-finite coordinates saturate (NaN becomes 0).
    #[inline]
    pub fn centroid(&self) -> Centroid {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        let end_x = x + f64::from(self.width);
        let end_y = y + f64::from(self.height);
        Centroid::new(((x + end_x) / 2.0) as i32, ((y + end_y) / 2.0) as i32)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn has_negative_extent(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }

    fn defect(&self) -> Option<&'static str> {
        if !self.is_finite() {
            Some("non-finite coordinate")
        } else if self.has_negative_extent() {
            Some("negative width or height")
        } else {
            None
        }
    }
}

/// What the tracker does with malformed boxes before extracting centroids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryPolicy {
    /// Use every box as given, degenerate centroids included.
    #[default]
    Passthrough,
    /// Zero out negative extents; drop boxes with non-finite coordinates.
    Clamp,
    /// Drop any box that is non-finite or has a negative extent.
    Reject,
}

impl GeometryPolicy {
    /// Returns the box the tracker should use, or `None` if it is dropped.
    pub fn apply(&self, bbox: BoundingBox) -> Option<BoundingBox> {
        match self {
            GeometryPolicy::Passthrough => Some(bbox),
            GeometryPolicy::Clamp => bbox.is_finite().then(|| BoundingBox {
                width: bbox.width.max(0.0),
                height: bbox.height.max(0.0),
                ..bbox
            }),
            GeometryPolicy::Reject => bbox.defect().is_none().then_some(bbox),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_conversions() {
        let bbox = BoundingBox::new(10.0, 20.0, 30.0, 40.0);

        assert_eq!(bbox.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(bbox.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_from_tlbr() {
        let bbox = BoundingBox::from_tlbr(10.0, 20.0, 40.0, 60.0);
        assert_eq!(bbox.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_from_xywh() {
        let bbox = BoundingBox::from_xywh(25.0, 40.0, 30.0, 40.0);
        assert_eq!(bbox.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_centroid_truncates() {
        // (1 + 4) / 2 = 2.5 -> 2, (2 + 7) / 2 = 4.5 -> 4
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 5.0);
        assert_eq!(bbox.centroid(), Centroid::new(2, 4));
    }

    #[test]
    fn test_centroid_truncates_toward_zero() {
        // (-3 + -2) / 2 = -2.5 -> -2
        let bbox = BoundingBox::new(-3.0, -3.0, 1.0, 1.0);
        assert_eq!(bbox.centroid(), Centroid::new(-2, -2));
    }

    #[test]
    fn test_negative_extent_centroid_not_validated() {
        let bbox = BoundingBox::new(10.0, 10.0, -20.0, -20.0);
        assert_eq!(bbox.centroid(), Centroid::new(0, 0));
    }

    #[test]
    fn test_nan_centroid_saturates() {
        let bbox = BoundingBox::new(f32::NAN, 4.0, 2.0, 2.0);
        assert_eq!(bbox.centroid(), Centroid::new(0, 5));
    }

    #[test]
    fn test_validated() {
        assert!(BoundingBox::validated(0.0, 0.0, 10.0, 10.0).is_ok());
        assert!(matches!(
            BoundingBox::validated(0.0, 0.0, -1.0, 10.0),
            Err(TrackerError::InvalidBoundingBox { .. })
        ));
        assert!(matches!(
            BoundingBox::validated(f32::INFINITY, 0.0, 1.0, 1.0),
            Err(TrackerError::InvalidBoundingBox { .. })
        ));
    }

    #[test]
    fn test_geometry_policy() {
        let negative = BoundingBox::new(10.0, 10.0, -4.0, 6.0);
        let nan = BoundingBox::new(f32::NAN, 0.0, 1.0, 1.0);

        assert_eq!(GeometryPolicy::Passthrough.apply(negative), Some(negative));
        assert_eq!(
            GeometryPolicy::Clamp.apply(negative),
            Some(BoundingBox::new(10.0, 10.0, 0.0, 6.0))
        );
        assert_eq!(GeometryPolicy::Reject.apply(negative), None);

        assert!(GeometryPolicy::Passthrough.apply(nan).is_some());
        assert_eq!(GeometryPolicy::Clamp.apply(nan), None);
        assert_eq!(GeometryPolicy::Reject.apply(nan), None);
    }
}
