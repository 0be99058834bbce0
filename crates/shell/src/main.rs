//! CLI for single-linkage clustering of 2D points.
//!
//! `linkage <INP_PATH> [TARGET]` reads the objects in `INP_PATH`, merges the
//! closest clusters until `TARGET` remain, and prints them to stdout.

mod logger;

use std::{io::Write, num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use linkage::report::ReportFormat;

/// Single-linkage clustering of labelled 2D points.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the file with the objects.
    inp_path: PathBuf,

    /// The number of clusters to produce. Capped at the number of objects.
    #[arg(default_value = "1")]
    target: NonZeroUsize,

    /// The format in which to print the clusters.
    #[arg(short('f'), long, value_enum, default_value = "text")]
    format: Format,

    /// The verbosity of the log written to stderr.
    #[arg(short('l'), long, value_enum, default_value = "warn")]
    log_level: logger::LogLevel,

    /// Write the log to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The output formats.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum Format {
    /// One line per cluster.
    Text,
    /// A JSON array of clusters.
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let _guard = logger::configure(args.log_level, args.log_file.as_deref())?;
    ftlog::info!("{args:?}");

    let clusters = linkage::loader::load_path(&args.inp_path).map_err(|e| e.to_string())?;
    let clusters = linkage::agglomerate(clusters, args.target.get()).map_err(|e| e.to_string())?;

    let mut out = std::io::stdout().lock();
    linkage::report::write(&mut out, &clusters, args.format.into()).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}
