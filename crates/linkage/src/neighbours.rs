//! Exhaustive search for the two closest clusters.

use crate::{distance::cluster_distance, ClusterCollection};

/// The indices of the two closest clusters and the distance between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPair {
    /// The smaller index.
    pub left: usize,
    /// The larger index.
    pub right: usize,
    /// The single-linkage distance between the two clusters.
    pub distance: f32,
}

/// Finds the pair of clusters with the smallest single-linkage distance.
///
/// All pairs `(i, j)` with `i < j` are scanned with `i` in the outer loop and
/// `j` in the inner one. Only a strictly smaller distance replaces the best
/// pair so far, so among tied pairs the lexicographically smallest wins.
///
/// Returns `None` if the collection holds fewer than two clusters.
#[must_use]
pub fn find_nearest_pair(collection: &ClusterCollection) -> Option<NearestPair> {
    let clusters = collection.clusters();
    let mut best: Option<NearestPair> = None;

    for (left, a) in clusters.iter().enumerate() {
        for (right, b) in clusters.iter().enumerate().skip(left + 1) {
            let Some(distance) = cluster_distance(a, b) else {
                continue;
            };
            if best.map_or(true, |p| distance < p.distance) {
                best = Some(NearestPair { left, right, distance });
            }
        }
    }

    best
}
