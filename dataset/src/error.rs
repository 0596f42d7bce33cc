//! Table validation errors.

use std::fmt;

use crate::Metric;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors that can occur when building or querying a benchmark table.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The table declares no libraries.
    NoLibraries,

    /// The table has no scenarios.
    EmptyTable,

    /// A library name was empty.
    EmptyLibraryName,

    /// A scenario label was empty.
    EmptyLabel,

    /// The same library was declared twice.
    DuplicateLibrary { library: String },

    /// The same scenario label was defined twice.
    DuplicateScenario { label: String },

    /// A scenario has no timing for a declared library.
    MissingTiming { scenario: String, library: String },

    /// A scenario has a timing for a library the table never declared.
    UnknownLibrary { scenario: String, library: String },

    /// A scenario has two timings for the same library.
    DuplicateTiming { scenario: String, library: String },

    /// A timing is negative, NaN or infinite.
    InvalidTiming {
        scenario: String,
        library: String,
        metric: Metric,
        value: f64,
    },

    /// Lookup of a scenario that is not in the table.
    ScenarioNotFound { label: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLibraries => write!(f, "table declares no libraries"),
            Self::EmptyTable => write!(f, "table has no scenarios"),
            Self::EmptyLibraryName => write!(f, "library name must not be empty"),
            Self::EmptyLabel => write!(f, "scenario label must not be empty"),
            Self::DuplicateLibrary { library } => {
                write!(f, "library {library:?} declared more than once")
            }
            Self::DuplicateScenario { label } => {
                write!(f, "duplicate scenario {label:?} would overwrite an earlier entry")
            }
            Self::MissingTiming { scenario, library } => {
                write!(f, "scenario {scenario:?} has no timing for library {library:?}")
            }
            Self::UnknownLibrary { scenario, library } => {
                write!(
                    f,
                    "scenario {scenario:?} references undeclared library {library:?}"
                )
            }
            Self::DuplicateTiming { scenario, library } => {
                write!(
                    f,
                    "scenario {scenario:?} has more than one timing for library {library:?}"
                )
            }
            Self::InvalidTiming {
                scenario,
                library,
                metric,
                value,
            } => {
                write!(
                    f,
                    "invalid {metric} timing {value} for {library:?} in scenario {scenario:?}"
                )
            }
            Self::ScenarioNotFound { label } => {
                write!(f, "scenario {label:?} not found")
            }
        }
    }
}

impl std::error::Error for DatasetError {}
