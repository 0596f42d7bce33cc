//! Benchmark tables and validation.

use std::collections::HashSet;

use crate::error::{DatasetError, DatasetResult};
use crate::{Library, Metric, Timing};

/// One benchmark case and the timings every library reported for it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scenario {
    pub label: String,
    pub entries: Vec<(Library, Timing)>,
}

impl Scenario {
    /// Creates a scenario with no timings.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// Adds a save/load timing pair for `library`.
    #[must_use]
    pub fn timing(mut self, library: impl Into<Library>, save: f64, load: f64) -> Self {
        self.entries.push((library.into(), Timing::new(save, load)));
        self
    }

    /// Returns the timing recorded for `library`, if any.
    #[must_use]
    pub fn get(&self, library: &Library) -> Option<Timing> {
        self.entries
            .iter()
            .find(|(lib, _)| lib == library)
            .map(|(_, timing)| *timing)
    }
}

/// An immutable table of scenarios, each with a timing for every library.
///
/// Libraries keep their declaration order, which is also the bar order in
/// charts. Scenarios keep insertion order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchTable {
    libraries: Vec<Library>,
    scenarios: Vec<Scenario>,
}

impl BenchTable {
    /// Creates a table after validation.
    pub fn new(libraries: Vec<Library>, scenarios: Vec<Scenario>) -> DatasetResult<Self> {
        let table = Self {
            libraries,
            scenarios,
        };
        table.validate()?;
        Ok(table)
    }

    /// Creates a table builder.
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Validates table invariants.
    pub fn validate(&self) -> DatasetResult<()> {
        if self.libraries.is_empty() {
            return Err(DatasetError::NoLibraries);
        }
        if self.scenarios.is_empty() {
            return Err(DatasetError::EmptyTable);
        }

        let mut declared = HashSet::new();
        for library in &self.libraries {
            if library.as_str().is_empty() {
                return Err(DatasetError::EmptyLibraryName);
            }
            if !declared.insert(library) {
                return Err(DatasetError::DuplicateLibrary {
                    library: library.to_string(),
                });
            }
        }

        let mut labels = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.label.is_empty() {
                return Err(DatasetError::EmptyLabel);
            }
            if !labels.insert(scenario.label.as_str()) {
                return Err(DatasetError::DuplicateScenario {
                    label: scenario.label.clone(),
                });
            }
            validate_scenario(scenario, &declared)?;

            for library in &self.libraries {
                if scenario.get(library).is_none() {
                    return Err(DatasetError::MissingTiming {
                        scenario: scenario.label.clone(),
                        library: library.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Libraries in declaration order.
    #[must_use]
    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Scenarios in insertion order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Scenario labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.scenarios.iter().map(|scenario| scenario.label.as_str())
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns `true` if the table has no scenarios.
    ///
    /// Validated tables are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Returns `true` if `library` is declared in this table.
    #[must_use]
    pub fn has_library(&self, library: &Library) -> bool {
        self.libraries.contains(library)
    }

    /// Looks up a scenario by label.
    #[must_use]
    pub fn scenario(&self, label: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.label == label)
    }

    /// Looks up a single measurement.
    pub fn timing(&self, label: &str, library: &Library, metric: Metric) -> DatasetResult<f64> {
        let scenario = self
            .scenario(label)
            .ok_or_else(|| DatasetError::ScenarioNotFound {
                label: label.to_string(),
            })?;
        scenario
            .get(library)
            .map(|timing| timing.get(metric))
            .ok_or_else(|| DatasetError::MissingTiming {
                scenario: label.to_string(),
                library: library.to_string(),
            })
    }
}

/// Builder for `BenchTable`.
#[derive(Debug, Default)]
pub struct TableBuilder {
    libraries: Vec<Library>,
    scenarios: Vec<Scenario>,
}

impl TableBuilder {
    /// Declares a library. Declaration order is bar order.
    #[must_use]
    pub fn library(mut self, library: impl Into<Library>) -> Self {
        self.libraries.push(library.into());
        self
    }

    /// Adds a scenario.
    #[must_use]
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Builds the table after validation.
    pub fn build(self) -> DatasetResult<BenchTable> {
        BenchTable::new(self.libraries, self.scenarios)
    }
}

fn validate_scenario(scenario: &Scenario, declared: &HashSet<&Library>) -> DatasetResult<()> {
    let mut seen = HashSet::new();
    for (library, timing) in &scenario.entries {
        if !declared.contains(library) {
            return Err(DatasetError::UnknownLibrary {
                scenario: scenario.label.clone(),
                library: library.to_string(),
            });
        }
        if !seen.insert(library) {
            return Err(DatasetError::DuplicateTiming {
                scenario: scenario.label.clone(),
                library: library.to_string(),
            });
        }
        for metric in Metric::ALL {
            let value = timing.get(metric);
            if !value.is_finite() || value < 0.0 {
                return Err(DatasetError::InvalidTiming {
                    scenario: scenario.label.clone(),
                    library: library.to_string(),
                    metric,
                    value,
                });
            }
        }
    }
    Ok(())
}
