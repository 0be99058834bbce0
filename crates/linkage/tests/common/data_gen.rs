//! Data generation utilities for testing.

use linkage::{Cluster, ClusterCollection, Point};
use rand::prelude::*;

/// Points A, B and C where A and C are the closest pair.
pub fn triangle() -> Vec<Point> {
    vec![Point::new(0, 0.0, 0.0), Point::new(1, 10.0, 10.0), Point::new(2, 1.0, 1.0)]
}

/// Points on a horizontal line with unit spacing, ids `0..n`.
pub fn line(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as i64, i as f32, 0.0))
        .collect()
}

/// `car` points with unique shuffled ids and coordinates in `[0, 1000]`.
pub fn random_points(car: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids = (0..car as i64).map(|i| i * 3 - 7).collect::<Vec<_>>();
    ids.shuffle(&mut rng);
    ids.into_iter()
        .map(|id| Point::new(id, rng.gen_range(0.0..=1000.0), rng.gen_range(0.0..=1000.0)))
        .collect()
}

/// One singleton cluster per point, in order.
pub fn singletons(points: &[Point]) -> ClusterCollection {
    let mut clusters = ClusterCollection::new();
    for &p in points {
        let cluster = Cluster::singleton(p).unwrap_or_else(|e| unreachable!("{e}"));
        clusters.push(cluster).unwrap_or_else(|e| unreachable!("{e}"));
    }
    clusters
}

/// The ids of every cluster, in order.
pub fn ids(clusters: &ClusterCollection) -> Vec<Vec<i64>> {
    clusters.iter().map(|c| c.ids().collect()).collect()
}

/// Renders points in the `count=<N>` input format.
pub fn to_input(points: &[Point]) -> String {
    let mut s = format!("count={}\n", points.len());
    for p in points {
        s.push_str(&format!("{} {} {}\n", p.id(), p.x(), p.y()));
    }
    s
}
