//! End-to-end profiling flow: file in, report out.

use crate::engine::{AccumulatorRegistry, Report};
use crate::error::Result;
use crate::reader::RecordReader;
use std::path::Path;

/// Outcome of profiling one file.
pub struct ProfileResponse {
    pub file_name: String,
    pub path: String,
    pub row_count: usize,
    pub column_count: usize,
    pub report: Report,
    pub duration: std::time::Duration,
}

/// Streams a CSV file through the engine and snapshots the result.
///
/// One row is held in memory at a time. Cell-level oddities (malformed
/// range payloads, non-numeric text in numeric-looking columns) degrade
/// gracefully inside the engine; only file-level problems (missing file,
/// undecodable bytes, broken CSV framing) surface as errors.
pub fn profile_file(path: &Path, delimiter: u8, top_k: usize) -> Result<ProfileResponse> {
    let start = std::time::Instant::now();

    let reader = RecordReader::open(path, delimiter)?;
    let column_count = reader.headers().len();

    let mut registry = AccumulatorRegistry::new();
    let mut row_count = 0usize;
    for record in reader {
        registry.ingest(&record?);
        row_count += 1;
    }

    let report = Report::build(&registry, top_k);
    let duration = start.elapsed();

    tracing::info!(
        rows = row_count,
        columns = column_count,
        numeric = report.numeric.len(),
        categorical = report.categorical.len(),
        elapsed_ms = duration.as_millis() as u64,
        "profile complete"
    );

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_owned();

    Ok(ProfileResponse {
        file_name,
        path: path.display().to_string(),
        row_count,
        column_count,
        report,
        duration,
    })
}
