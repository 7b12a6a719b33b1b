//! Ordered store of live tracks.
//!
//! Tracks live in a dense vector in registration order, with a side index
//! from id to position. Association derives its row order from this
//! iteration order, so removal must keep the survivors' relative order.

use std::collections::HashMap;

use crate::tracker::centroid::Centroid;
use crate::tracker::track::{Track, TrackId};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    tracks: Vec<Track>,
    index: HashMap<TrackId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.index.get(id).map(|&pos| &self.tracks[pos])
    }

    /// Tracks in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.iter().map(Track::id)
    }

    pub fn centroids(&self) -> impl Iterator<Item = (TrackId, Centroid)> + '_ {
        self.tracks.iter().map(|t| (t.id(), t.centroid()))
    }

    /// Ordered snapshot of id to centroid.
    pub fn to_map(&self) -> Vec<(TrackId, Centroid)> {
        self.centroids().collect()
    }

    pub(crate) fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn get_mut(&mut self, id: &TrackId) -> Option<&mut Track> {
        let pos = *self.index.get(id)?;
        Some(&mut self.tracks[pos])
    }

    pub(crate) fn position_mut(&mut self, pos: usize) -> Option<&mut Track> {
        self.tracks.get_mut(pos)
    }

    /// Append a track. The caller guarantees the id is fresh.
    pub(crate) fn insert(&mut self, track: Track) {
        debug_assert!(!self.index.contains_key(&track.id()));
        self.index.insert(track.id(), self.tracks.len());
        self.tracks.push(track);
    }

    pub(crate) fn remove(&mut self, id: &TrackId) -> Option<Track> {
        let pos = self.index.remove(id)?;
        let track = self.tracks.remove(pos);
        for shifted in &self.tracks[pos..] {
            if let Some(slot) = self.index.get_mut(&shifted.id()) {
                *slot -= 1;
            }
        }
        Some(track)
    }

    pub(crate) fn clear(&mut self) {
        self.tracks.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
