//! Relative performance against a baseline library.

use dataset::{BenchTable, Library, Metric};

use crate::error::{CompareError, CompareResult};

/// Normalized values for one library, one per scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelativeSeries {
    pub library: Library,
    /// `values[i]` belongs to `Comparison::labels[i]`.
    pub values: Vec<f64>,
}

/// Every library's timings for one metric, divided by the baseline's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    pub metric: Metric,
    pub baseline: Library,
    /// Scenario labels in table order.
    pub labels: Vec<String>,
    /// One series per table library, in table order.
    pub series: Vec<RelativeSeries>,
}

impl Comparison {
    /// Returns the series for `library`.
    #[must_use]
    pub fn series_for(&self, library: &Library) -> Option<&RelativeSeries> {
        self.series.iter().find(|series| &series.library == library)
    }

    /// Returns the normalized value of `library` in scenario `label`.
    #[must_use]
    pub fn value(&self, label: &str, library: &Library) -> Option<f64> {
        let idx = self.labels.iter().position(|l| l == label)?;
        self.series_for(library)
            .and_then(|series| series.values.get(idx).copied())
    }

    /// Largest normalized value across all series, or 0 when empty.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Libraries in series order.
    pub fn libraries(&self) -> impl Iterator<Item = &Library> + '_ {
        self.series.iter().map(|series| &series.library)
    }
}

/// Normalizes `metric` timings in `table` against `baseline`.
///
/// The baseline's own values are exactly 1.0. Every other value is the
/// library's timing divided by the baseline's timing in the same scenario.
pub fn normalize(
    table: &BenchTable,
    metric: Metric,
    baseline: &Library,
) -> CompareResult<Comparison> {
    if !table.has_library(baseline) {
        return Err(CompareError::UnknownBaseline {
            baseline: baseline.to_string(),
        });
    }

    let mut denominators = Vec::with_capacity(table.len());
    for scenario in table.scenarios() {
        let value = table.timing(&scenario.label, baseline, metric)?;
        if value == 0.0 {
            return Err(CompareError::ZeroBaseline {
                scenario: scenario.label.clone(),
                baseline: baseline.to_string(),
                metric,
            });
        }
        denominators.push(value);
    }

    let mut series = Vec::with_capacity(table.libraries().len());
    for library in table.libraries() {
        let values = if library == baseline {
            vec![1.0; table.len()]
        } else {
            table
                .scenarios()
                .iter()
                .zip(&denominators)
                .map(|(scenario, denominator)| {
                    table
                        .timing(&scenario.label, library, metric)
                        .map(|value| value / denominator)
                })
                .collect::<Result<Vec<_>, _>>()?
        };
        series.push(RelativeSeries {
            library: library.clone(),
            values,
        });
    }

    Ok(Comparison {
        metric,
        baseline: baseline.clone(),
        labels: table.labels().map(str::to_string).collect(),
        series,
    })
}

/// Normalizes every metric, in `Metric::ALL` order.
pub fn normalize_all(table: &BenchTable, baseline: &Library) -> CompareResult<Vec<Comparison>> {
    Metric::ALL
        .iter()
        .map(|metric| normalize(table, *metric, baseline))
        .collect()
}
