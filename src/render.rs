//! Report presentation: human-readable text and structured JSON.

use crate::engine::Report;
use crate::error::Result;
use std::fmt::Write as _;

/// Renders the two-section text report.
///
/// Numeric values are formatted to two decimal places; undefined statistics
/// come out as `NaN` rather than being dropped. Categorical columns list as
/// many top values as the report was built with.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("\nNumeric columns:\n----------------\n");
    for (column, s) in &report.numeric {
        let _ = writeln!(
            out,
            "{column:<35} n={:>6}  mean={:.2}  sd={:.2}  min={:.2}  max={:.2}",
            s.count, s.mean, s.stdev, s.min, s.max
        );
    }

    out.push_str("\nCategorical columns:\n--------------------\n");
    for (column, s) in &report.categorical {
        match s.top_values.as_slice() {
            [] => {
                let _ = writeln!(out, "{column:<35} unique={:<5}  top=None  (n=0)", s.unique);
            }
            [(value, count)] => {
                let _ = writeln!(
                    out,
                    "{column:<35} unique={:<5}  top={value:?}  (n={count})",
                    s.unique
                );
            }
            many => {
                let _ = writeln!(out, "{column:<35} unique={:<5}  top values:", s.unique);
                for (value, count) in many {
                    let _ = writeln!(out, "    {value:?}  (n={count})");
                }
            }
        }
    }

    out
}

/// Renders the structured form as pretty-printed JSON.
///
/// Non-finite statistics (empty columns, single-observation stdev) are
/// emitted as `null`.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
