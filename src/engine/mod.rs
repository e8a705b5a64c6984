//! The streaming statistics engine.
//!
//! One record at a time: range-encoded cells are expanded into numeric
//! sub-fields, every cell is coerced to a typed value, and the value is
//! routed to a per-column accumulator. Memory stays O(1) per numeric column
//! and O(distinct values) per categorical column — the dataset itself is
//! never buffered.

pub mod categorical;
pub mod coerce;
pub mod numeric;
pub mod range;
pub mod registry;
pub mod report;

pub use categorical::CategoricalAccumulator;
pub use coerce::{TypedValue, coerce};
pub use numeric::NumericAccumulator;
pub use range::RESERVED_RANGE_COLUMNS;
pub use registry::{AccumulatorRegistry, Record};
pub use report::{CategoricalSummary, NumericSummary, Report};
