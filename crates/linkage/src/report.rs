//! Rendering clusters as text or JSON.

use std::io::Write;

use crate::{ClusterCollection, LinkageError};

/// The formats in which clusters can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// A `Clusters:` header followed by one `cluster <i>: ...` line per cluster.
    #[default]
    Text,
    /// A JSON array of clusters, each an array of `{id, x, y}` objects.
    Json,
}

/// Writes the clusters in the text format.
///
/// # Errors
///
/// * If writing to `writer` fails.
pub fn write_text<W: Write>(writer: &mut W, clusters: &ClusterCollection) -> Result<(), LinkageError> {
    writer.write_all(render_text(clusters).as_bytes()).map_err(report_error)
}

/// Renders the clusters in the text format.
#[must_use]
pub fn render_text(clusters: &ClusterCollection) -> String {
    let mut out = String::from("Clusters:\n");
    for (i, cluster) in clusters.iter().enumerate() {
        let points = cluster.iter().map(ToString::to_string).collect::<Vec<_>>();
        out.push_str(&format!("cluster {i}: {}\n", points.join(" ")));
    }
    out
}

/// Renders the clusters as pretty-printed JSON.
///
/// # Errors
///
/// * If serialization fails.
pub fn render_json(clusters: &ClusterCollection) -> Result<String, LinkageError> {
    serde_json::to_string_pretty(clusters).map_err(report_error)
}

/// Writes the clusters in the given `format`, followed by a newline for JSON.
///
/// # Errors
///
/// * If rendering or writing fails.
pub fn write<W: Write>(writer: &mut W, clusters: &ClusterCollection, format: ReportFormat) -> Result<(), LinkageError> {
    match format {
        ReportFormat::Text => write_text(writer, clusters),
        ReportFormat::Json => {
            let json = render_json(clusters)?;
            writeln!(writer, "{json}").map_err(report_error)
        }
    }
}

/// Wraps any displayable failure as a `Report` error.
fn report_error<E: std::fmt::Display>(e: E) -> LinkageError {
    LinkageError::Report(e.to_string())
}
