//! Libraries, metrics and timing pairs.

use std::fmt;
use std::str::FromStr;

/// A serialization library taking part in a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Library(String);

impl Library {
    /// Creates a library from its display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the library name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Library {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Library {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Library {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Library {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which half of a round trip was timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Metric {
    /// Writing values into an archive.
    Save,
    /// Reading values back out of an archive.
    Load,
}

impl Metric {
    /// All metrics in plot order: load on top, save below.
    pub const ALL: [Self; 2] = [Self::Load, Self::Save];

    /// Returns the lowercase metric name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Load => "load",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMetricError {
    pub found: String,
}

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric {:?}, expected save or load", self.found)
    }
}

impl std::error::Error for ParseMetricError {}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "save" => Ok(Self::Save),
            "load" => Ok(Self::Load),
            _ => Err(ParseMetricError {
                found: s.to_string(),
            }),
        }
    }
}

/// Save and load timings for one library in one scenario.
///
/// Units are whatever the benchmark reported; only ratios between libraries
/// are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Timing {
    pub save: f64,
    pub load: f64,
}

impl Timing {
    /// Creates a timing pair.
    #[must_use]
    pub const fn new(save: f64, load: f64) -> Self {
        Self { save, load }
    }

    /// Returns the timing for `metric`.
    #[must_use]
    pub const fn get(self, metric: Metric) -> f64 {
        match metric {
            Metric::Save => self.save,
            Metric::Load => self.load,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_plot_order_is_load_then_save() {
        assert_eq!(Metric::ALL, [Metric::Load, Metric::Save]);
    }

    #[test]
    fn metric_parses_case_insensitively() {
        assert_eq!("Save".parse::<Metric>().unwrap(), Metric::Save);
        assert_eq!(" load ".parse::<Metric>().unwrap(), Metric::Load);
        let err = "store".parse::<Metric>().unwrap_err();
        assert!(err.to_string().contains("store"));
    }

    #[test]
    fn metric_display_matches_as_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string(), metric.as_str());
        }
    }

    #[test]
    fn timing_selects_metric() {
        let timing = Timing::new(7.63, 2.75);
        assert_eq!(timing.get(Metric::Save), 7.63);
        assert_eq!(timing.get(Metric::Load), 2.75);
    }

    #[test]
    fn library_compares_with_str() {
        let lib = Library::new("Cereal");
        assert_eq!(lib, "Cereal");
        assert_eq!(lib.as_str(), "Cereal");
        assert_eq!(lib.to_string(), "Cereal");
    }
}
