//! Point-to-point and single-linkage cluster-to-cluster distances.

use crate::{Cluster, Point};

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use linkage::{distance::point_distance, Point};
///
/// let a = Point::new(0, 0.0, 0.0);
/// let b = Point::new(1, 3.0, 4.0);
///
/// assert!((point_distance(&a, &b) - 5.0).abs() <= f32::EPSILON);
/// ```
#[must_use]
pub fn point_distance(a: &Point, b: &Point) -> f32 {
    distances::vectors::euclidean::<f32, f32>(&a.coordinates(), &b.coordinates())
}

/// Single-linkage distance between two clusters: the smallest distance
/// between a point of `a` and a point of `b`.
///
/// Returns `None` if either cluster is empty.
#[must_use]
pub fn cluster_distance(a: &Cluster, b: &Cluster) -> Option<f32> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let min = a
        .iter()
        .flat_map(|p| b.iter().map(move |q| point_distance(p, q)))
        .fold(f32::MAX, f32::min);
    Some(min)
}
