//! Centroid-based multi-object tracking.
//!
//! Each frame's bounding boxes are reduced to integer centroids and paired
//! with the previous frame's tracks by greedy nearest-distance matching.
//! Unmatched detections become new tracks; tracks that go unmatched for more
//! than `max_disappeared` consecutive frames are dropped.
//!
//! ```
//! use centroid_tracker::{BoundingBox, CentroidTracker, TrackerConfig};
//!
//! let mut tracker = CentroidTracker::new(TrackerConfig::default());
//! let tracks = tracker.update(&[BoundingBox::new(10.0, 10.0, 20.0, 20.0)]);
//! assert_eq!(tracks.len(), 1);
//! ```

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use integration::{BoundingBoxBuilder, DetectionSource, IntoDetections, TrackerPipeline};
pub use tracker::{
    BoundingBox, Centroid, CentroidTracker, GeometryPolicy, MatchStrategy, Registry, Track,
    TrackId, TrackState, TrackerConfig, UpdateSummary,
};
