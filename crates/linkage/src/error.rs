//! Errors raised while loading, clustering or reporting.

use std::path::PathBuf;

/// The fieldless kind of a `LinkageError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input could not be opened or read.
    FileUnavailable,
    /// The `count=<N>` header line is missing or malformed.
    MalformedHeader,
    /// An object line is not of the form `<id> <x> <y>`.
    MalformedRecord,
    /// An id occurs more than once in the input.
    DuplicateId,
    /// A coordinate lies outside `[0, 1000]`.
    CoordinateOutOfRange,
    /// The input holds fewer objects than its header declares.
    TruncatedInput,
    /// Storage for points or clusters could not be allocated.
    OutOfMemory,
    /// A cluster without points was offered to a collection.
    EmptyCluster,
    /// Two cluster indices do not name a valid pair.
    InvalidPair,
    /// The clusters could not be rendered or written.
    Report,
}

/// Errors raised by this crate. Every one of them is fatal to a run.
#[derive(Debug)]
pub enum LinkageError {
    /// The input file could not be opened or read.
    FileUnavailable {
        /// Path of the input, if it came from disk.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The first line is not `count=<N>`. Holds the offending line.
    MalformedHeader(String),
    /// An object line could not be parsed.
    MalformedRecord {
        /// One-based line number in the input.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// The id was already used by an earlier object.
    DuplicateId(i64),
    /// An object has a coordinate outside `[0, 1000]`.
    CoordinateOutOfRange {
        /// Id of the object.
        id: i64,
        /// Its x coordinate.
        x: f32,
        /// Its y coordinate.
        y: f32,
    },
    /// Fewer objects than declared.
    TruncatedInput {
        /// Number of objects declared in the header.
        expected: usize,
        /// Number of objects actually read.
        found: usize,
    },
    /// Growing some storage to `requested` slots failed.
    OutOfMemory {
        /// The number of slots that could not be reserved.
        requested: usize,
    },
    /// A cluster without points, which a collection never holds.
    EmptyCluster {
        /// The position the cluster was offered at.
        index: usize,
    },
    /// `left` is not smaller than `right`, or `right` is out of bounds.
    InvalidPair {
        /// The index of the cluster meant to absorb the other.
        left: usize,
        /// The index of the cluster meant to be absorbed.
        right: usize,
        /// The number of clusters in the collection.
        len: usize,
    },
    /// Rendering or writing the report failed.
    Report(String),
}

impl LinkageError {
    /// The kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FileUnavailable { .. } => ErrorKind::FileUnavailable,
            Self::MalformedHeader(_) => ErrorKind::MalformedHeader,
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            Self::DuplicateId(_) => ErrorKind::DuplicateId,
            Self::CoordinateOutOfRange { .. } => ErrorKind::CoordinateOutOfRange,
            Self::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::EmptyCluster { .. } => ErrorKind::EmptyCluster,
            Self::InvalidPair { .. } => ErrorKind::InvalidPair,
            Self::Report(_) => ErrorKind::Report,
        }
    }
}

impl std::fmt::Display for LinkageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileUnavailable { path: Some(path), source } => {
                write!(f, "file {path:?} cannot be opened or read: {source}")
            }
            Self::FileUnavailable { path: None, source } => write!(f, "input cannot be read: {source}"),
            Self::MalformedHeader(line) => {
                write!(f, "expected a header of the form `count=<N>`, found {line:?}")
            }
            Self::MalformedRecord { line, content } => {
                write!(f, "line {line}: expected `<id> <x> <y>`, found {content:?}")
            }
            Self::DuplicateId(id) => write!(f, "the id {id} was already used, ids must be unique"),
            Self::CoordinateOutOfRange { id, x, y } => write!(
                f,
                "coordinates of object {id} out of range, 0 <= x/y <= 1000: x = {x}, y = {y}"
            ),
            Self::TruncatedInput { expected, found } => write!(
                f,
                "missing {} objects: count={expected}, given={found}",
                expected.saturating_sub(*found)
            ),
            Self::OutOfMemory { requested } => {
                write!(f, "memory for {requested} items cannot be allocated")
            }
            Self::EmptyCluster { index } => write!(f, "cluster {index} holds no points"),
            Self::InvalidPair { left, right, len } => write!(
                f,
                "cannot merge cluster {right} into {left} among {len} clusters, need {left} < {right} < {len}"
            ),
            Self::Report(msg) => write!(f, "cannot write the clusters: {msg}"),
        }
    }
}

impl std::error::Error for LinkageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
