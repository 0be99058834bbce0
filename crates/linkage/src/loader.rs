//! Reading the initial singleton clusters from the `count=<N>` text format.
//!
//! ```text
//! count=3
//! 40 86 663
//! 43 747 938
//! 47 285 973
//! ```
//!
//! Every object becomes a cluster of its own, in input order. Ids must be
//! unique and coordinates must lie in `[0, 1000]`. Lines after the declared
//! number of objects are ignored and blank lines are skipped.

use std::{
    collections::HashSet,
    io::BufRead,
    path::Path,
};

use crate::{Cluster, ClusterCollection, LinkageError, Point};

/// Reads the clusters from the file at `path`.
///
/// # Errors
///
/// * If the file cannot be opened or read.
/// * Any of the errors of [`load_reader`].
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<ClusterCollection, LinkageError> {
    let path = path.as_ref();
    ftlog::info!("Reading objects from {path:?}...");

    let file = std::fs::File::open(path).map_err(|source| LinkageError::FileUnavailable {
        path: Some(path.to_path_buf()),
        source,
    })?;

    load_reader(std::io::BufReader::new(file)).map_err(|e| match e {
        LinkageError::FileUnavailable { path: None, source } => LinkageError::FileUnavailable {
            path: Some(path.to_path_buf()),
            source,
        },
        e => e,
    })
}

/// Reads the clusters from an in-memory string.
///
/// # Errors
///
/// See [`load_reader`].
pub fn load_str(input: &str) -> Result<ClusterCollection, LinkageError> {
    load_reader(input.as_bytes())
}

/// Reads the clusters from `reader`.
///
/// # Errors
///
/// * `FileUnavailable` if reading fails.
/// * `MalformedHeader` if the first line is not `count=<N>`.
/// * `MalformedRecord` if an object line is not `<id> <x> <y>`.
/// * `DuplicateId` if an id repeats.
/// * `CoordinateOutOfRange` if a coordinate is outside `[0, 1000]`.
/// * `TruncatedInput` if there are fewer objects than declared.
/// * `OutOfMemory` if the clusters cannot be allocated.
pub fn load_reader<R: BufRead>(reader: R) -> Result<ClusterCollection, LinkageError> {
    let result = read_clusters(reader);
    match &result {
        Ok(clusters) => ftlog::info!("Loaded {} objects.", clusters.len()),
        Err(e) => ftlog::warn!("Rejected input: {e}"),
    }
    result
}

/// Does the work of `load_reader`. The id set lives only for this call.
fn read_clusters<R: BufRead>(reader: R) -> Result<ClusterCollection, LinkageError> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line.map_err(unreadable)?,
        None => return Err(LinkageError::MalformedHeader(String::new())),
    };
    let expected = parse_header(&header)?;
    ftlog::debug!("Header declares {expected} objects.");

    let mut clusters = ClusterCollection::with_capacity(expected)?;
    let mut ids = HashSet::new();
    ids.try_reserve(expected)
        .map_err(|_| LinkageError::OutOfMemory { requested: expected })?;

    while clusters.len() < expected {
        let Some((i, line)) = lines.next() else {
            return Err(LinkageError::TruncatedInput {
                expected,
                found: clusters.len(),
            });
        };
        let line = line.map_err(unreadable)?;
        if line.trim().is_empty() {
            continue;
        }

        let point = parse_record(&line, i + 1)?;
        if !ids.insert(point.id()) {
            return Err(LinkageError::DuplicateId(point.id()));
        }
        if !point.in_bounds() {
            return Err(LinkageError::CoordinateOutOfRange {
                id: point.id(),
                x: point.x(),
                y: point.y(),
            });
        }

        clusters.push(Cluster::singleton(point)?)?;
    }

    Ok(clusters)
}

/// Wraps a read failure that has no path attached yet.
fn unreadable(source: std::io::Error) -> LinkageError {
    LinkageError::FileUnavailable { path: None, source }
}

/// Parses `count=<N>`.
fn parse_header(line: &str) -> Result<usize, LinkageError> {
    line.trim()
        .strip_prefix("count=")
        .and_then(|n| n.trim().parse::<usize>().ok())
        .ok_or_else(|| LinkageError::MalformedHeader(line.to_string()))
}

/// Parses `<id> <x> <y>`. `line_number` is one-based.
fn parse_record(line: &str, line_number: usize) -> Result<Point, LinkageError> {
    let malformed = || LinkageError::MalformedRecord {
        line: line_number,
        content: line.to_string(),
    };

    let mut fields = line.split_whitespace();
    let (Some(id), Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };

    let id = id.parse::<i64>().map_err(|_| malformed())?;
    let x = x.parse::<f32>().map_err(|_| malformed())?;
    let y = y.parse::<f32>().map_err(|_| malformed())?;

    Ok(Point::new(id, x, y))
}
