//! Per-column accumulator routing.

use super::categorical::CategoricalAccumulator;
use super::coerce::{self, TypedValue};
use super::numeric::NumericAccumulator;
use super::range;
use indexmap::IndexMap;

/// One input row: ordered mapping from column name to raw text.
///
/// Ephemeral — a record only lives for the duration of its own ingestion.
pub type Record = IndexMap<String, String>;

/// Owns every accumulator for one run.
///
/// The numeric and categorical maps are independent on purpose: cells are
/// classified one at a time, so a column whose values are not uniformly
/// typed legitimately shows up in both. Construct one registry per run,
/// feed it records, then snapshot it into a report.
#[derive(Clone, Debug, Default)]
pub struct AccumulatorRegistry {
    numeric: IndexMap<String, NumericAccumulator>,
    categorical: IndexMap<String, CategoricalAccumulator>,
}

impl AccumulatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one coerced cell to the accumulator for its column,
    /// creating the accumulator on first use.
    pub fn route(&mut self, column: &str, value: &TypedValue) {
        match value {
            TypedValue::Number(x) => {
                self.numeric
                    .entry(column.to_owned())
                    .or_default()
                    .add(*x);
            }
            TypedValue::Text(s) => {
                self.categorical
                    .entry(column.to_owned())
                    .or_default()
                    .add(s);
            }
        }
    }

    /// Ingests one row: expands the reserved range columns into their
    /// derived sub-fields, coerces every cell and routes it.
    ///
    /// Derived fields never overwrite a column that already exists in the
    /// record. A reserved cell that fails to expand contributes no derived
    /// fields and is otherwise treated like any other cell.
    pub fn ingest(&mut self, record: &Record) {
        for (column, raw) in record {
            let typed = coerce::coerce(raw);
            self.route(column, &typed);
        }

        for reserved in range::RESERVED_RANGE_COLUMNS {
            let Some(raw) = record.get(reserved) else {
                continue;
            };
            let Some((lower, upper)) = range::expand(reserved, raw) else {
                continue;
            };
            for (name, text) in [
                (range::lower_name(reserved), lower),
                (range::upper_name(reserved), upper),
            ] {
                if record.contains_key(&name) {
                    continue;
                }
                let typed = coerce::coerce(&text);
                self.route(&name, &typed);
            }
        }
    }

    /// Combines accumulators from a registry built over a disjoint batch of
    /// rows. The extension point for fan-out/fan-in chunked ingestion:
    /// workers accumulate independently and merge once their input is
    /// exhausted.
    pub fn merge(&mut self, other: &Self) {
        for (column, acc) in &other.numeric {
            self.numeric
                .entry(column.clone())
                .or_default()
                .merge(acc);
        }
        for (column, acc) in &other.categorical {
            self.categorical
                .entry(column.clone())
                .or_default()
                .merge(acc);
        }
    }

    pub fn numeric(&self) -> &IndexMap<String, NumericAccumulator> {
        &self.numeric
    }

    pub fn categorical(&self) -> &IndexMap<String, CategoricalAccumulator> {
        &self.categorical
    }
}
