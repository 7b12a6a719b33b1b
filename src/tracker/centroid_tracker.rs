//! Centroid tracker: association plus track lifecycle management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Result, TrackerError};
use crate::tracker::bbox::{BoundingBox, GeometryPolicy};
use crate::tracker::centroid::Centroid;
use crate::tracker::matching::{self, AssignmentResult, MatchStrategy};
use crate::tracker::registry::Registry;
use crate::tracker::track::{IdAllocator, Track, TrackId};

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Consecutive missed frames a track survives; it is removed once the
    /// counter exceeds this value.
    pub max_disappeared: u32,
    pub geometry: GeometryPolicy,
    pub strategy: MatchStrategy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_disappeared: 50,
            geometry: GeometryPolicy::Passthrough,
            strategy: MatchStrategy::Greedy,
        }
    }
}

impl TrackerConfig {
    pub fn with_max_disappeared(mut self, max_disappeared: u32) -> Self {
        self.max_disappeared = max_disappeared;
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryPolicy) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TrackerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// What happened to the registry during one `update` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// 1-based frame number
    pub frame: u64,
    /// Tracks matched this frame, with their new centroid
    pub matched: Vec<(TrackId, Centroid)>,
    /// Tracks registered from unmatched detections
    pub registered: Vec<TrackId>,
    /// Tracks that missed this frame but are still live
    pub aged: Vec<TrackId>,
    /// Tracks removed after exceeding `max_disappeared`
    pub expired: Vec<TrackId>,
}

pub struct CentroidTracker {
    registry: Registry,
    ids: IdAllocator,
    config: TrackerConfig,
    frame_id: u64,
    last_update: UpdateSummary,
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            registry: Registry::new(),
            ids: IdAllocator::new(),
            config,
            frame_id: 0,
            last_update: UpdateSummary::default(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Live tracks in registration order.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Number of `update` calls so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_id
    }

    pub fn last_update(&self) -> &UpdateSummary {
        &self.last_update
    }

    /// Add a new track at `centroid` with a zero disappeared counter.
    pub fn register(&mut self, centroid: Centroid) -> TrackId {
        let id = self.ids.next_id();
        self.registry.insert(Track::new(id, centroid));
        debug!(track_id = %id, %centroid, "registered track");
        id
    }

    /// Remove a live track.
    pub fn unregister(&mut self, id: &TrackId) -> Result<Track> {
        let track = self
            .registry
            .remove(id)
            .ok_or(TrackerError::UnknownTrack(*id))?;
        debug!(track_id = %id, disappeared = track.disappeared(), "unregistered track");
        Ok(track)
    }

    /// Drop every track. Ids already handed out stay retired.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.last_update = UpdateSummary::default();
        self.frame_id = 0;
    }

    /// Process one frame of detections and return the current tracks.
    ///
    /// Tracks that missed this frame are still reported unless they
    /// were removed for exceeding `max_disappeared`.
    pub fn update(&mut self, detections: &[BoundingBox]) -> &Registry {
        self.frame_id += 1;
        let mut summary = UpdateSummary {
            frame: self.frame_id,
            ..Default::default()
        };

        let inputs = self.extract_centroids(detections);

        if inputs.is_empty() {
            // No detections: every track misses this frame.
            let ids: Vec<TrackId> = self.registry.ids().collect();
            for id in ids {
                self.age(id, &mut summary);
            }
        } else if self.registry.is_empty() {
            for &centroid in &inputs {
                summary.registered.push(self.register(centroid));
            }
        } else {
            self.associate(&inputs, &mut summary);
        }

        trace!(
            frame = summary.frame,
            detections = inputs.len(),
            matched = summary.matched.len(),
            registered = summary.registered.len(),
            aged = summary.aged.len(),
            expired = summary.expired.len(),
            live = self.registry.len(),
            "frame processed"
        );

        self.last_update = summary;
        &self.registry
    }

    fn extract_centroids(&self, detections: &[BoundingBox]) -> Vec<Centroid> {
        detections
            .iter()
            .filter_map(|&bbox| {
                let kept = self.config.geometry.apply(bbox);
                if kept.is_none() {
                    warn!(?bbox, policy = ?self.config.geometry, "dropping malformed detection");
                }
                kept
            })
            .map(|bbox| bbox.centroid())
            .collect()
    }

    fn associate(&mut self, inputs: &[Centroid], summary: &mut UpdateSummary) {
        let (row_ids, rows): (Vec<TrackId>, Vec<Centroid>) = self
            .registry
            .as_slice()
            .iter()
            .map(|t| (t.id(), t.centroid()))
            .unzip();

        let dists = matching::distance_matrix(&rows, inputs);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::assign(&dists, self.config.strategy);

        for (row, col) in matches {
            if let Some(track) = self.registry.position_mut(row) {
                track.mark_matched(inputs[col]);
                summary.matched.push((row_ids[row], inputs[col]));
            }
        }

        // Aging only happens when tracks are at least as many as detections;
        // otherwise leftover detections become new tracks and unmatched rows
        // keep their counters untouched.
        if rows.len() >= inputs.len() {
            for row in unmatched_tracks {
                self.age(row_ids[row], summary);
            }
        } else {
            for col in unmatched_detections {
                summary.registered.push(self.register(inputs[col]));
            }
        }
    }

    fn age(&mut self, id: TrackId, summary: &mut UpdateSummary) {
        let Some(track) = self.registry.get_mut(&id) else {
            return;
        };
        let disappeared = track.mark_missed();
        if disappeared > self.config.max_disappeared {
            if let Some(track) = self.registry.remove(&id) {
                debug!(track_id = %id, centroid = %track.centroid(), disappeared, "track expired");
                summary.expired.push(id);
            }
        } else {
            summary.aged.push(id);
        }
    }
}
