//! Error types for normalization.

use std::fmt;

use dataset::Metric;

/// Result type for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors that can occur while normalizing a table against a baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    /// Underlying table error.
    Dataset(dataset::DatasetError),

    /// The baseline library is not declared in the table.
    UnknownBaseline { baseline: String },

    /// The baseline measured zero, so no finite ratio exists.
    ZeroBaseline {
        scenario: String,
        baseline: String,
        metric: Metric,
    },
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "dataset error: {e}"),
            Self::UnknownBaseline { baseline } => {
                write!(f, "baseline library {baseline:?} is not in the table")
            }
            Self::ZeroBaseline {
                scenario,
                baseline,
                metric,
            } => {
                write!(
                    f,
                    "baseline {baseline:?} has a zero {metric} timing in scenario {scenario:?}"
                )
            }
        }
    }
}

impl std::error::Error for CompareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<dataset::DatasetError> for CompareError {
    fn from(err: dataset::DatasetError) -> Self {
        Self::Dataset(err)
    }
}
