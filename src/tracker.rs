mod bbox;
mod centroid;
mod centroid_tracker;
mod matching;
mod registry;
mod track;
mod track_state;

pub use bbox::{BoundingBox, GeometryPolicy};
pub use centroid::Centroid;
pub use centroid_tracker::{CentroidTracker, TrackerConfig, UpdateSummary};
pub use matching::{
    AssignmentResult, MatchStrategy, distance_matrix, greedy_assignment, optimal_assignment,
};
pub use registry::Registry;
pub use track::{IdAllocator, Track, TrackId};
pub use track_state::TrackState;
