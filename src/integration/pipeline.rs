//! TrackerPipeline for combining detection with tracking.

use crate::tracker::{Centroid, CentroidTracker, TrackId, TrackerConfig};

use super::DetectionSource;

/// A combined tracker that bundles a detector with a `CentroidTracker`.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::new(config),
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame and return the live tracks in registration order.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// Id and centroid of every live track, or the detector's error. A failed
    /// detection leaves the tracker untouched.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<(TrackId, Centroid)>, D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        Ok(self.tracker.update(&detections).to_map())
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}
