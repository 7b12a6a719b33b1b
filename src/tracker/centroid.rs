//! Integer centroids and the distance metric used for association.

use nalgebra::{Point2, distance};
use serde::{Deserialize, Serialize};

/// Position proxy for a tracked object: the integer midpoint of its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Centroid {
    pub x: i32,
    pub y: i32,
}

impl Centroid {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_point(&self) -> Point2<f64> {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance to another centroid.
    #[inline]
    pub fn distance(&self, other: &Centroid) -> f64 {
        distance(&self.to_point(), &other.to_point())
    }
}

impl From<(i32, i32)> for Centroid {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Centroid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
