//! Immutable report snapshots.

use super::registry::AccumulatorRegistry;
use indexmap::IndexMap;
use serde::Serialize;

/// Summary of one numeric column.
///
/// NaN marks the undefined cases (no observations, or fewer than two for
/// the standard deviation); serde_json renders non-finite floats as `null`.
#[derive(Clone, Debug, Serialize)]
pub struct NumericSummary {
    pub count: u64,
    pub mean: f64,
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
}

/// Summary of one categorical column.
#[derive(Clone, Debug, Serialize)]
pub struct CategoricalSummary {
    pub unique: usize,
    /// Most frequent value and its count, or `None` for an empty table.
    pub top: Option<(String, u64)>,
    /// The `k` most frequent values requested for the run. Always contains
    /// `top` as its first entry when non-empty.
    #[serde(skip)]
    pub top_values: Vec<(String, u64)>,
}

/// Read-only snapshot of every accumulator at the end of a run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub numeric: IndexMap<String, NumericSummary>,
    pub categorical: IndexMap<String, CategoricalSummary>,
}

impl Report {
    /// Snapshots the registry. Pure: the registry is not mutated and can be
    /// fed further rows afterwards if the caller wants interim reports.
    ///
    /// `top_k` controls how many categorical values are retained for the
    /// human-readable listing; the structured form always reports the
    /// single most frequent value.
    pub fn build(registry: &AccumulatorRegistry, top_k: usize) -> Self {
        let numeric = registry
            .numeric()
            .iter()
            .map(|(column, acc)| {
                (
                    column.clone(),
                    NumericSummary {
                        count: acc.count(),
                        mean: acc.mean(),
                        stdev: acc.stdev(),
                        min: acc.min(),
                        max: acc.max(),
                    },
                )
            })
            .collect();

        let categorical = registry
            .categorical()
            .iter()
            .map(|(column, acc)| {
                let top_values = acc.top_k(top_k.max(1));
                (
                    column.clone(),
                    CategoricalSummary {
                        unique: acc.unique(),
                        top: top_values.first().cloned(),
                        top_values,
                    },
                )
            })
            .collect();

        Self { numeric, categorical }
    }
}
