//! A naive single-linkage clustering used to check the real one.

use linkage::Point;

fn dist(a: &Point, b: &Point) -> f32 {
    let (dx, dy) = (a.x() - b.x(), a.y() - b.y());
    (dx * dx + dy * dy).sqrt()
}

fn linkage(a: &[Point], b: &[Point]) -> f32 {
    let mut min = f32::MAX;
    for p in a {
        for q in b {
            let d = dist(p, q);
            if d < min {
                min = d;
            }
        }
    }
    min
}

/// Returns the pair `(i, j)` with the smallest linkage, first one on ties.
pub fn nearest_pair(groups: &[Vec<Point>]) -> (usize, usize, f32) {
    let mut best = (0, 0, f32::MAX);
    for i in 0..groups.len() {
        for j in (i + 1)..groups.len() {
            let d = linkage(&groups[i], &groups[j]);
            if d < best.2 {
                best = (i, j, d);
            }
        }
    }
    best
}

/// Clusters `points` down to `target` groups and returns the sorted ids.
pub fn cluster(points: &[Point], target: usize) -> Vec<Vec<i64>> {
    let mut groups = points.iter().map(|&p| vec![p]).collect::<Vec<_>>();
    let target = target.clamp(1, groups.len().max(1));

    while groups.len() > target {
        let (i, j, _) = nearest_pair(&groups);
        let absorbed = groups.remove(j);
        groups[i].extend(absorbed);
        groups[i].sort_by_key(Point::id);
    }

    groups
        .into_iter()
        .map(|g| g.into_iter().map(|p| p.id()).collect())
        .collect()
}
