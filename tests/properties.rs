//! Property tests for registry invariants across arbitrary frame sequences.

use std::collections::{HashMap, HashSet};

use centroid_tracker::{BoundingBox, Centroid, CentroidTracker, TrackId, TrackerConfig};
use proptest::prelude::*;

fn frame_strategy() -> impl Strategy<Value = Vec<BoundingBox>> {
    prop::collection::vec(
        (0i32..400, 0i32..400, 1i32..40, 1i32..40).prop_map(|(x, y, w, h)| {
            BoundingBox::new(x as f32, y as f32, w as f32, h as f32)
        }),
        0..6,
    )
}

fn snapshot(tracker: &CentroidTracker) -> HashMap<TrackId, (Centroid, u32)> {
    tracker
        .registry()
        .iter()
        .map(|t| (t.id(), (t.centroid(), t.disappeared())))
        .collect()
}

proptest! {
    #[test]
    fn registry_invariants_hold(
        max_disappeared in 0u32..4,
        frames in prop::collection::vec(frame_strategy(), 1..25),
    ) {
        let mut tracker =
            CentroidTracker::new(TrackerConfig::default().with_max_disappeared(max_disappeared));
        let mut retired: HashSet<TrackId> = HashSet::new();
        let mut issued: HashSet<TrackId> = HashSet::new();

        for boxes in &frames {
            let before = snapshot(&tracker);
            let was_empty = before.is_empty();

            tracker.update(boxes);
            let after = snapshot(&tracker);
            let summary = tracker.last_update().clone();

            // Uniqueness: live ids are distinct and never come back once retired.
            let live: Vec<TrackId> = tracker.registry().ids().collect();
            prop_assert_eq!(live.len(), after.len());
            prop_assert!(live.iter().all(|id| !retired.contains(id)));

            // Fresh registrations never reuse an id seen before.
            for id in &summary.registered {
                prop_assert!(issued.insert(*id));
                prop_assert_eq!(after[id].1, 0);
            }

            let matched: HashMap<TrackId, Centroid> = summary.matched.iter().copied().collect();
            for (id, (centroid, disappeared)) in &before {
                match after.get(id) {
                    Some((new_centroid, new_disappeared)) => {
                        if let Some(target) = matched.get(id) {
                            prop_assert_eq!(*new_disappeared, 0);
                            prop_assert_eq!(new_centroid, target);
                        } else if summary.aged.contains(id) {
                            // Monotonic aging: one step per missed frame, centroid frozen.
                            prop_assert_eq!(*new_disappeared, disappeared + 1);
                            prop_assert_eq!(new_centroid, centroid);
                        } else {
                            prop_assert_eq!(new_disappeared, disappeared);
                            prop_assert_eq!(new_centroid, centroid);
                        }
                    }
                    None => {
                        // Destruction threshold: removed only by exceeding the limit.
                        prop_assert!(summary.expired.contains(id));
                        prop_assert!(disappeared + 1 > max_disappeared);
                        retired.insert(*id);
                    }
                }
            }

            // Nothing survives past the threshold.
            prop_assert!(after.values().all(|(_, d)| *d <= max_disappeared));

            // Conservation under growth.
            if was_empty {
                prop_assert_eq!(after.len(), boxes.len());
                prop_assert!(after.values().all(|(_, d)| *d == 0));
            }

            if boxes.is_empty() {
                prop_assert!(summary.matched.is_empty());
                prop_assert!(summary.registered.is_empty());
                prop_assert_eq!(summary.aged.len() + summary.expired.len(), before.len());
            }
        }
    }

    #[test]
    fn at_most_min_pairs_are_matched(
        seed in frame_strategy(),
        next in frame_strategy(),
    ) {
        let mut tracker = CentroidTracker::default();
        tracker.update(&seed);
        let tracks = tracker.registry().len();

        tracker.update(&next);
        let summary = tracker.last_update();
        prop_assert!(summary.matched.len() <= tracks.min(next.len()));
        if tracks >= next.len() {
            prop_assert!(summary.registered.is_empty());
        } else if tracks > 0 {
            prop_assert_eq!(summary.registered.len(), next.len() - summary.matched.len());
        }
    }
}
