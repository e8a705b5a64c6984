//! # adstat — streaming column statistics for ad-archive CSV exports
//!
//! adstat profiles tabular data in a single pass: each cell is classified
//! as numeric or categorical, the three range-encoded columns
//! (`estimated_audience_size`, `impressions`, `spend`) are expanded into
//! `_lower`/`_upper` numeric sub-fields, and per-column summary statistics
//! are maintained incrementally without buffering the dataset.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn example() -> adstat::error::Result<()> {
//! let response = adstat::profile::profile_file(Path::new("ads.csv"), b',', 1)?;
//! println!("{} rows, {} columns", response.row_count, response.column_count);
//!
//! for (column, stats) in &response.report.numeric {
//!     println!("{column}: mean={:.2}", stats.mean);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`engine`]: coercion, range expansion, accumulators, registry, report
//! - [`reader`]: streaming CSV record source
//! - [`profile`]: file-to-report flow
//! - [`render`]: text and JSON presentation
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing setup
//!
//! ## Memory Discipline
//!
//! The engine never stores the rows it has seen: numeric columns keep five
//! running fields, categorical columns keep one counter per distinct value.
//! For chunked ingestion, accumulate per chunk and combine the registries
//! with [`engine::AccumulatorRegistry::merge`] before building the report.

#![warn(clippy::all, rust_2018_idioms)]

pub mod engine;
pub mod error;
pub mod logging;
pub mod profile;
pub mod reader;
pub mod render;
