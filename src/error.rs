//! Error types for the centroid tracker.

use std::path::PathBuf;

use thiserror::Error;

use crate::tracker::TrackId;

/// Errors surfaced by the tracker's fallible entry points.
///
/// `CentroidTracker::update` itself never fails; these cover explicit
/// unregistration, box validation and configuration loading.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The track id is not present in the registry.
    #[error("track {0} is not registered")]
    UnknownTrack(TrackId),

    /// The bounding box has non-finite coordinates or a negative extent.
    #[error("invalid bounding box (x={x}, y={y}, w={width}, h={height}): {reason}")]
    InvalidBoundingBox {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        reason: &'static str,
    },

    /// The tracker configuration could not be parsed.
    #[error("invalid tracker config: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
