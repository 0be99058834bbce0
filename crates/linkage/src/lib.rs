#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod agglomerate;
mod cluster;
mod collection;
pub mod distance;
mod error;
pub mod loader;
mod neighbours;
mod point;
pub mod report;

pub use agglomerate::{agglomerate, Agglomerator, Merge, State};
pub use cluster::{Cluster, CLUSTER_CHUNK};
pub use collection::ClusterCollection;
pub use error::{ErrorKind, LinkageError};
pub use neighbours::{find_nearest_pair, NearestPair};
pub use point::{Point, COORDINATE_MAX, COORDINATE_MIN};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
