//! Trait for upstream object detectors.

use crate::tracker::BoundingBox;

/// Trait for object detection backends feeding the tracker.
///
/// # Example
///
/// ```
/// use centroid_tracker::{BoundingBox, DetectionSource};
///
/// struct FixedDetector;
///
/// impl DetectionSource for FixedDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<BoundingBox>, Self::Error> {
///         Ok(vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return the detected boxes.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<BoundingBox>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to bounding boxes.
pub trait IntoDetections {
    /// Convert the output into a vector of boxes.
    fn into_detections(self) -> Vec<BoundingBox>;
}

impl IntoDetections for Vec<BoundingBox> {
    fn into_detections(self) -> Vec<BoundingBox> {
        self
    }
}

/// Rows of `[x, y, width, height]`.
impl IntoDetections for Vec<[f32; 4]> {
    fn into_detections(self) -> Vec<BoundingBox> {
        self.into_iter()
            .map(|[x, y, w, h]| BoundingBox::new(x, y, w, h))
            .collect()
    }
}
