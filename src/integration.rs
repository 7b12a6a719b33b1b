//! Integration module for connecting object detectors with the tracker.
//!
//! The tracker only consumes bounding boxes; these traits and helpers let
//! any detector feed it once per frame.

mod builder;
mod detector;
mod pipeline;

pub use builder::BoundingBoxBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::TrackerPipeline;
