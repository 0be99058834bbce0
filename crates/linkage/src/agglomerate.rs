//! The merge loop that reduces a collection to a target number of clusters.

use crate::{find_nearest_pair, ClusterCollection, LinkageError};

/// The state of an `Agglomerator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// There are more clusters than the target.
    Running,
    /// The collection holds exactly the target number of clusters.
    Done,
}

/// A record of one merge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// Index of the cluster that absorbed the other. It keeps its index.
    pub kept: usize,
    /// Index of the cluster that was absorbed and removed.
    pub removed: usize,
    /// The single-linkage distance between the two clusters.
    pub distance: f32,
    /// The number of points in the merged cluster.
    pub size: usize,
}

/// Drives single-linkage agglomeration of a `ClusterCollection`.
///
/// Every step merges the two closest clusters, keeping the merged cluster at
/// the smaller index and removing the larger one, until only `target`
/// clusters remain.
#[derive(Debug)]
pub struct Agglomerator {
    /// The clusters being merged.
    collection: ClusterCollection,
    /// The number of clusters at which to stop.
    target: usize,
    /// The merges performed so far, in order.
    merges: Vec<Merge>,
}

impl Agglomerator {
    /// Creates a new `Agglomerator`.
    ///
    /// The target is clamped to the number of clusters in `collection`. A
    /// target of zero is raised to one unless the collection is empty.
    #[must_use]
    pub fn new(collection: ClusterCollection, target: usize) -> Self {
        let target = target.max(1).min(collection.len());
        Self {
            collection,
            target,
            merges: Vec::new(),
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> State {
        if self.collection.len() > self.target {
            State::Running
        } else {
            State::Done
        }
    }

    /// The number of clusters at which the loop stops.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// The clusters in their current state.
    #[must_use]
    pub const fn collection(&self) -> &ClusterCollection {
        &self.collection
    }

    /// The merges performed so far, in order.
    #[must_use]
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Performs one merge step.
    ///
    /// Returns the merge that was performed, or `None` if already `Done`.
    ///
    /// # Errors
    ///
    /// * If the merged cluster cannot be allocated. The run must be abandoned.
    /// * If no pair of clusters can be compared while still `Running`.
    pub fn step(&mut self) -> Result<Option<Merge>, LinkageError> {
        if self.state() == State::Done {
            return Ok(None);
        }

        // While running there are at least two clusters, so a pair exists
        // unless some cluster holds no points.
        let Some(pair) = find_nearest_pair(&self.collection) else {
            let index = self.collection.iter().position(crate::Cluster::is_empty).unwrap_or_default();
            return Err(LinkageError::EmptyCluster { index });
        };

        self.collection.merge_pair(pair.left, pair.right)?;

        let size = self.collection.get(pair.left).map_or(0, crate::Cluster::len);
        let merge = Merge {
            kept: pair.left,
            removed: pair.right,
            distance: pair.distance,
            size,
        };
        ftlog::debug!(
            "Merged cluster {} into {} at distance {}, {} clusters left.",
            merge.removed,
            merge.kept,
            merge.distance,
            self.collection.len()
        );

        self.merges.push(merge);
        Ok(Some(merge))
    }

    /// Merges until the target number of clusters remains.
    ///
    /// # Errors
    ///
    /// * If any merge step fails. The partially merged clusters are dropped.
    pub fn run(mut self) -> Result<ClusterCollection, LinkageError> {
        let start = self.collection.len();
        while self.step()?.is_some() {}

        ftlog::info!(
            "Reduced {start} clusters to {} with {} merges.",
            self.collection.len(),
            self.merges.len()
        );
        Ok(self.collection)
    }
}

/// Merges the closest clusters of `collection` until `target` remain.
///
/// See [`Agglomerator::new`] for how `target` is clamped.
///
/// # Errors
///
/// * If a merged cluster cannot be allocated.
pub fn agglomerate(collection: ClusterCollection, target: usize) -> Result<ClusterCollection, LinkageError> {
    Agglomerator::new(collection, target).run()
}
