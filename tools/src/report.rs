//! Table and JSON views of normalized comparisons.

use compare::Comparison;
use dataset::Library;
use serde::Serialize;

/// JSON output of `relbench show --format json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub baseline: Option<Library>,
    pub comparisons: Vec<Comparison>,
}

impl Report {
    #[must_use]
    pub fn new(comparisons: Vec<Comparison>) -> Self {
        let baseline = comparisons.first().map(|cmp| cmp.baseline.clone());
        Self {
            baseline,
            comparisons,
        }
    }
}

/// Formats comparisons as an aligned table, one row per metric and scenario.
#[must_use]
pub fn format_pretty(comparisons: &[Comparison]) -> String {
    let mut out = String::new();
    let label_width = comparisons
        .iter()
        .flat_map(|cmp| cmp.labels.iter())
        .map(|label| label.chars().count())
        .chain(std::iter::once("scenario".len()))
        .max()
        .unwrap_or(0);

    for (idx, cmp) in comparisons.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let columns: Vec<(&Library, usize)> = cmp
            .libraries()
            .map(|lib| (lib, lib.as_str().chars().count().max(8)))
            .collect();

        let mut header = format!("{:<6}  {:<label_width$}", "metric", "scenario");
        for &(lib, width) in &columns {
            header.push_str(&format!("  {:>width$}", lib.as_str()));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        for (row, label) in cmp.labels.iter().enumerate() {
            let mut line = format!("{:<6}  {label:<label_width$}", cmp.metric.as_str());
            for (&(_, width), series) in columns.iter().zip(&cmp.series) {
                let value = series.values.get(row).copied().unwrap_or(f64::NAN);
                line.push_str(&format!("  {value:>width$.4}"));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}
