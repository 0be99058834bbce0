//! A growable group of points, kept in ascending id order after merges.

use serde::{Deserialize, Serialize};

use crate::{LinkageError, Point};

/// The number of slots by which a full `Cluster` grows.
///
/// [`Cluster::merge_from`] reserves all the chunks it needs in one allocation,
/// so the capacity matches chunk-by-chunk growth with fewer reallocations.
pub const CLUSTER_CHUNK: usize = 10;

/// A group of points with explicit capacity bookkeeping.
///
/// The capacity is the number of points for which storage has been reserved.
/// It is always at least the number of points held, and it grows by
/// [`CLUSTER_CHUNK`] slots at a time rather than one point at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Cluster {
    /// The points, in insertion order until the next sort.
    points: Vec<Point>,
    /// The number of reserved slots.
    capacity: usize,
}

impl Cluster {
    /// Creates an empty `Cluster` with storage reserved for `capacity` points.
    ///
    /// A capacity of zero reserves nothing.
    ///
    /// # Errors
    ///
    /// * If the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, LinkageError> {
        let mut points = Vec::new();
        points
            .try_reserve_exact(capacity)
            .map_err(|_| LinkageError::OutOfMemory { requested: capacity })?;
        Ok(Self { points, capacity })
    }

    /// Creates a `Cluster` holding only `point`.
    ///
    /// # Errors
    ///
    /// * If the storage cannot be allocated.
    pub fn singleton(point: Point) -> Result<Self, LinkageError> {
        let mut cluster = Self::with_capacity(1)?;
        cluster.append(point)?;
        Ok(cluster)
    }

    /// The number of points in the cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of points for which storage is reserved.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The points of the cluster.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// An iterator over the points of the cluster.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// An iterator over the ids of the points, in storage order.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.iter().map(Point::id)
    }

    /// Appends `point` to the end of the cluster.
    ///
    /// If the cluster is full, its capacity first grows by [`CLUSTER_CHUNK`].
    ///
    /// # Errors
    ///
    /// * If the cluster is full and growing it fails. The point is not added.
    pub fn append(&mut self, point: Point) -> Result<(), LinkageError> {
        if self.points.len() >= self.capacity {
            let new_capacity = self
                .capacity
                .checked_add(CLUSTER_CHUNK)
                .ok_or(LinkageError::OutOfMemory { requested: usize::MAX })?;
            self.resize(new_capacity)?;
        }
        self.points.push(point);
        Ok(())
    }

    /// Appends every point of `source` and then sorts by id.
    ///
    /// Capacity grows by as many whole chunks as needed, reserved before any
    /// point is copied. If that reservation fails the cluster is left as it
    /// was. `source` is not modified.
    ///
    /// # Errors
    ///
    /// * If the storage for the combined points cannot be allocated.
    pub fn merge_from(&mut self, source: &Self) -> Result<(), LinkageError> {
        let required = self
            .points
            .len()
            .checked_add(source.len())
            .ok_or(LinkageError::OutOfMemory { requested: usize::MAX })?;

        if required > self.capacity {
            let chunks = (required - self.capacity).div_ceil(CLUSTER_CHUNK);
            let new_capacity = chunks
                .checked_mul(CLUSTER_CHUNK)
                .and_then(|extra| self.capacity.checked_add(extra))
                .ok_or(LinkageError::OutOfMemory { requested: usize::MAX })?;
            self.resize(new_capacity)?;
        }

        self.points.extend_from_slice(&source.points);
        self.sort();
        Ok(())
    }

    /// Sorts the points in ascending order of id.
    ///
    /// The sort is stable, so points sharing an id keep their relative order.
    pub fn sort(&mut self) {
        self.points.sort_by_key(Point::id);
    }

    /// Releases the storage and resets to an empty cluster of capacity zero.
    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.capacity = 0;
    }

    /// Grows the reserved storage to `new_capacity` slots. Never shrinks.
    fn resize(&mut self, new_capacity: usize) -> Result<(), LinkageError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        self.points
            .try_reserve_exact(new_capacity - self.points.len())
            .map_err(|_| LinkageError::OutOfMemory { requested: new_capacity })?;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl From<Vec<Point>> for Cluster {
    fn from(points: Vec<Point>) -> Self {
        let capacity = points.len();
        Self { points, capacity }
    }
}

impl From<Cluster> for Vec<Point> {
    fn from(cluster: Cluster) -> Self {
        cluster.points
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, CLUSTER_CHUNK};

    use super::Cluster;

    fn line(ids: &[i64]) -> Cluster {
        let mut c = Cluster::with_capacity(0).unwrap_or_else(|e| unreachable!("{e}"));
        for &id in ids {
            #[allow(clippy::cast_precision_loss)]
            c.append(Point::new(id, id as f32, 0.0)).unwrap_or_else(|e| unreachable!("{e}"));
        }
        c
    }

    #[test]
    fn zero_capacity() {
        let c = Cluster::with_capacity(0).unwrap_or_else(|e| unreachable!("{e}"));
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 0);
    }

    #[test]
    fn append_grows_by_chunk() {
        let mut c = Cluster::singleton(Point::new(0, 0.0, 0.0)).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(c.capacity(), 1);

        c.append(Point::new(1, 1.0, 1.0)).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(c.capacity(), 1 + CLUSTER_CHUNK);
        assert_eq!(c.len(), 2);

        let c = line(&(0..=CLUSTER_CHUNK as i64).collect::<Vec<_>>());
        assert_eq!(c.len(), CLUSTER_CHUNK + 1);
        assert_eq!(c.capacity(), 2 * CLUSTER_CHUNK);
    }

    #[test]
    fn merge_sorts_and_keeps_source() {
        let mut a = line(&[5, 1, 9]);
        let b = line(&[4, 0]);
        a.merge_from(&b).unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(a.ids().collect::<Vec<_>>(), vec![0, 1, 4, 5, 9]);
        assert_eq!(b.ids().collect::<Vec<_>>(), vec![4, 0]);
    }

    #[test]
    fn merge_grows_in_whole_chunks() {
        let mut a = Cluster::singleton(Point::new(0, 0.0, 0.0)).unwrap_or_else(|e| unreachable!("{e}"));
        let b = line(&(1..=25).collect::<Vec<_>>());
        a.merge_from(&b).unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(a.len(), 26);
        assert_eq!(a.capacity(), 1 + 3 * CLUSTER_CHUNK);
    }

    #[test]
    fn clear_releases() {
        let mut c = line(&[3, 2, 1]);
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 0);
    }

    #[test]
    fn duplicate_ids_sort_stably() {
        let mut c = Cluster::with_capacity(3).unwrap_or_else(|e| unreachable!("{e}"));
        for p in [Point::new(2, 0.0, 0.0), Point::new(1, 1.0, 0.0), Point::new(1, 2.0, 0.0)] {
            c.append(p).unwrap_or_else(|e| unreachable!("{e}"));
        }
        c.sort();
        let xs = c.iter().map(Point::x).collect::<Vec<_>>();
        assert_eq!(xs, vec![1.0, 2.0, 0.0]);
    }
}
