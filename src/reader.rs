//! Streaming CSV record source.
//!
//! Yields one [`Record`] at a time so the engine never holds more than a
//! single row in memory. Quoting, embedded newlines and delimiter handling
//! come from the csv crate's RFC 4180 parser.

use crate::engine::Record;
use crate::error::{AdstatError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Header-aware CSV reader producing ordered column → raw text records.
pub struct RecordReader {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<File>,
}

impl RecordReader {
    /// Opens a CSV file and reads its header row.
    ///
    /// Header names are whitespace-trimmed so a padded reserved column
    /// like `impressions ` still triggers range expansion. Cell text is
    /// left untouched; the coercer decides what whitespace means per cell.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, when it cannot be parsed (including
    /// invalid UTF-8), or when the header row has no columns.
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        if !path.is_file() {
            return Err(AdstatError::InvalidPath(path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::Headers)
            .flexible(true)
            .from_path(path)
            .map_err(|e| AdstatError::Csv(format!("{}: {e}", path.display())))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AdstatError::Csv(format!("{}: {e}", path.display())))?
            .iter()
            .map(str::to_owned)
            .collect();

        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(AdstatError::EmptyInput(path.display().to_string()));
        }

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Pairs a raw row with the header. Short rows are padded with empty
    /// strings; surplus fields beyond the header are dropped.
    fn to_record(&self, raw: &StringRecord) -> Record {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), raw.get(i).unwrap_or_default().to_owned()))
            .collect()
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.records.next()?;
        Some(
            raw.map(|r| self.to_record(&r))
                .map_err(|e| AdstatError::Csv(e.to_string())),
        )
    }
}
