//! Association of existing tracks to new detections.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::tracker::centroid::Centroid;

/// How rows (tracks) are paired with columns (detections).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Resolve rows in ascending order of their nearest distance, first come first served.
    #[default]
    Greedy,
    /// Minimum total distance assignment (Jonker-Volgenant).
    Optimal,
}

/// Compute the Euclidean distance matrix between track and detection centroids.
pub fn distance_matrix(tracks: &[Centroid], detections: &[Centroid]) -> Array2<f64> {
    let mut dists = Array2::zeros((tracks.len(), detections.len()));
    for (i, t) in tracks.iter().enumerate() {
        for (j, d) in detections.iter().enumerate() {
            dists[[i, j]] = t.distance(d);
        }
    }
    dists
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

impl AssignmentResult {
    fn all_unmatched(num_rows: usize, num_cols: usize) -> Self {
        Self {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: (0..num_cols).collect(),
        }
    }

    fn from_masks(matches: Vec<(usize, usize)>, used_rows: &[bool], used_cols: &[bool]) -> Self {
        Self {
            unmatched_tracks: unused(used_rows),
            unmatched_detections: unused(used_cols),
            matches,
        }
    }
}

fn unused(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &used)| if used { None } else { Some(i) })
        .collect()
}

pub fn assign(cost_matrix: &Array2<f64>, strategy: MatchStrategy) -> AssignmentResult {
    match strategy {
        MatchStrategy::Greedy => greedy_assignment(cost_matrix),
        MatchStrategy::Optimal => optimal_assignment(cost_matrix),
    }
}

/// Greedy nearest-neighbour assignment.
///
/// Each row is paired with its arg-min column. Rows are visited in ascending
/// order of their minimum distance (ties keep row order), and a pair is only
/// committed when neither the row nor the column has been taken yet. A row
/// whose nearest column is already taken stays unmatched for this frame even
/// if other columns are free.
pub fn greedy_assignment(cost_matrix: &Array2<f64>) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 || num_cols == 0 {
        return AssignmentResult::all_unmatched(num_rows, num_cols);
    }

    // (row, arg-min column, min value); arg-min takes the first minimum.
    let mut nearest: Vec<(usize, usize, f64)> = cost_matrix
        .rows()
        .into_iter()
        .enumerate()
        .map(|(row, dists)| {
            let (col, min) = dists.iter().copied().enumerate().fold(
                (0, f64::INFINITY),
                |best, (j, d)| if d < best.1 { (j, d) } else { best },
            );
            (row, col, min)
        })
        .collect();
    nearest.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut used_rows = vec![false; num_rows];
    let mut used_cols = vec![false; num_cols];
    let mut matches = Vec::with_capacity(num_rows.min(num_cols));

    for (row, col, _) in nearest {
        if used_rows[row] || used_cols[col] {
            continue;
        }
        used_rows[row] = true;
        used_cols[col] = true;
        matches.push((row, col));
    }

    AssignmentResult::from_masks(matches, &used_rows, &used_cols)
}

/// Minimum-cost assignment over a padded square matrix.
///
/// Always commits `min(rows, cols)` pairs. Falls back to the greedy pass if
/// the solver fails.
pub fn optimal_assignment(cost_matrix: &Array2<f64>) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 || num_cols == 0 {
        return AssignmentResult::all_unmatched(num_rows, num_cols);
    }

    let size = num_rows.max(num_cols);
    let pad = cost_matrix.iter().copied().fold(0.0_f64, f64::max) + 1.0;
    let mut padded = Array2::<f64>::from_elem((size, size), pad);
    padded
        .slice_mut(ndarray::s![..num_rows, ..num_cols])
        .assign(cost_matrix);

    let row_to_col = match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => row_to_col,
        Err(_) => {
            warn!(rows = num_rows, cols = num_cols, "optimal assignment failed, falling back to greedy");
            return greedy_assignment(cost_matrix);
        }
    };

    let mut used_rows = vec![false; num_rows];
    let mut used_cols = vec![false; num_cols];
    let mut matches = Vec::with_capacity(num_rows.min(num_cols));

    for (row, &col) in row_to_col.iter().enumerate().take(num_rows) {
        if col < num_cols {
            used_rows[row] = true;
            used_cols[col] = true;
            matches.push((row, col));
        }
    }

    AssignmentResult::from_masks(matches, &used_rows, &used_cols)
}
