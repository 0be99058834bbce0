//! An ordered collection of clusters, addressed by position.

use serde::{Deserialize, Serialize};

use crate::{Cluster, LinkageError};

/// An ordered sequence of clusters.
///
/// The position of a cluster is its index, used both by the neighbour search
/// and for removal. Removal preserves the order of the remaining clusters.
/// Every cluster in the collection holds at least one point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cluster>", into = "Vec<Cluster>")]
pub struct ClusterCollection {
    /// The clusters, in order.
    clusters: Vec<Cluster>,
}

impl ClusterCollection {
    /// Creates an empty `ClusterCollection`.
    #[must_use]
    pub const fn new() -> Self {
        Self { clusters: Vec::new() }
    }

    /// Creates an empty `ClusterCollection` with room for `capacity` clusters.
    ///
    /// # Errors
    ///
    /// * If the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, LinkageError> {
        let mut clusters = Vec::new();
        clusters
            .try_reserve_exact(capacity)
            .map_err(|_| LinkageError::OutOfMemory { requested: capacity })?;
        Ok(Self { clusters })
    }

    /// Adds `cluster` at the end of the collection.
    ///
    /// # Errors
    ///
    /// * If `cluster` holds no points.
    /// * If the collection is full and cannot grow.
    pub fn push(&mut self, cluster: Cluster) -> Result<(), LinkageError> {
        if cluster.is_empty() {
            return Err(LinkageError::EmptyCluster {
                index: self.clusters.len(),
            });
        }
        let requested = self.clusters.len() + 1;
        self.clusters
            .try_reserve(1)
            .map_err(|_| LinkageError::OutOfMemory { requested })?;
        self.clusters.push(cluster);
        Ok(())
    }

    /// The number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether there are no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// The cluster at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    /// The clusters, in order.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// An iterator over the clusters, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// The total number of points over all clusters.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Removes and returns the cluster at `index`, shifting every later
    /// cluster one position to the left.
    ///
    /// Returns `None`, leaving the collection as it was, if `index` is out of
    /// bounds.
    pub fn remove(&mut self, index: usize) -> Option<Cluster> {
        (index < self.clusters.len()).then(|| self.clusters.remove(index))
    }

    /// Merges the cluster at `right` into the cluster at `left` and then
    /// removes the cluster at `right`.
    ///
    /// The merged cluster keeps index `left` and clusters after `right` shift
    /// left by one. If the merge fails, the collection is unchanged.
    ///
    /// # Errors
    ///
    /// * If `left >= right` or `right` is out of bounds.
    /// * If the merged cluster cannot be allocated.
    pub fn merge_pair(&mut self, left: usize, right: usize) -> Result<(), LinkageError> {
        let len = self.clusters.len();
        if left >= right || right >= len {
            return Err(LinkageError::InvalidPair { left, right, len });
        }

        let (head, tail) = self.clusters.split_at_mut(right);
        head[left].merge_from(&tail[0])?;

        self.clusters.remove(right);
        Ok(())
    }
}

impl TryFrom<Vec<Cluster>> for ClusterCollection {
    type Error = LinkageError;

    fn try_from(clusters: Vec<Cluster>) -> Result<Self, Self::Error> {
        match clusters.iter().position(Cluster::is_empty) {
            Some(index) => Err(LinkageError::EmptyCluster { index }),
            None => Ok(Self { clusters }),
        }
    }
}

impl From<ClusterCollection> for Vec<Cluster> {
    fn from(collection: ClusterCollection) -> Self {
        collection.clusters
    }
}

impl IntoIterator for ClusterCollection {
    type Item = Cluster;
    type IntoIter = std::vec::IntoIter<Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClusterCollection {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
