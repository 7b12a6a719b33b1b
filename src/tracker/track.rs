//! Single tracked object and its identity.

use serde::{Deserialize, Serialize};

use crate::tracker::centroid::Centroid;
use crate::tracker::track_state::TrackState;

/// Persistent identity of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(u64);

impl TrackId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source owned by a single tracker instance.
///
/// Ids start at 1 and are never handed out twice, even after the track
/// they named has been unregistered.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next unique id.
    pub fn next_id(&mut self) -> TrackId {
        let id = TrackId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

/// Single object track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    id: TrackId,
    centroid: Centroid,
    disappeared: u32,
}

impl Track {
    pub(crate) fn new(id: TrackId, centroid: Centroid) -> Self {
        Self {
            id,
            centroid,
            disappeared: 0,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Last matched centroid.
    pub fn centroid(&self) -> Centroid {
        self.centroid
    }

    /// Consecutive frames since this track was last matched.
    pub fn disappeared(&self) -> u32 {
        self.disappeared
    }

    pub fn state(&self) -> TrackState {
        TrackState::from_disappeared(self.disappeared)
    }

    /// Record a match: move to the new centroid and reset the counter.
    pub(crate) fn mark_matched(&mut self, centroid: Centroid) {
        self.centroid = centroid;
        self.disappeared = 0;
    }

    /// Record a missed frame and return the new counter value.
    pub(crate) fn mark_missed(&mut self) -> u32 {
        self.disappeared = self.disappeared.saturating_add(1);
        self.disappeared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();

        assert_eq!(a.as_u64(), 1);
        assert!(a < b && b < c);
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut first = IdAllocator::new();
        let mut second = IdAllocator::new();
        first.next_id();
        first.next_id();

        assert_eq!(second.next_id().as_u64(), 1);
    }

    #[test]
    fn test_track_counter() {
        let mut ids = IdAllocator::new();
        let mut track = Track::new(ids.next_id(), Centroid::new(5, 5));
        assert_eq!(track.disappeared(), 0);
        assert_eq!(track.state(), TrackState::Tracked);

        assert_eq!(track.mark_missed(), 1);
        assert_eq!(track.mark_missed(), 2);
        assert_eq!(track.state(), TrackState::Disappeared { frames: 2 });
        assert_eq!(track.centroid(), Centroid::new(5, 5));

        track.mark_matched(Centroid::new(8, 9));
        assert_eq!(track.disappeared(), 0);
        assert_eq!(track.centroid(), Centroid::new(8, 9));
    }
}
