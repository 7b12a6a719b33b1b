/// Track state derived from the disappeared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// Matched on the most recent frame
    Tracked,
    /// Missed on the last `frames` consecutive frames, not yet expired
    Disappeared { frames: u32 },
}

impl TrackState {
    pub fn from_disappeared(frames: u32) -> Self {
        if frames == 0 {
            TrackState::Tracked
        } else {
            TrackState::Disappeared { frames }
        }
    }
}
