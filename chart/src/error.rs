//! Error types for chart layout and rendering.

use std::fmt;

use dataset::Library;

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors that can occur while laying out or rendering a chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// No comparisons were given, so there is nothing to draw.
    NoPanels,

    /// A configuration value is out of range.
    InvalidConfig { field: ConfigField, reason: ConfigReason },

    /// A bar group is wider than its category slot.
    BarsOverflowCategory { libraries: usize, bar_width: f64 },

    /// A series does not hold exactly one value per category.
    SeriesLengthMismatch {
        library: Library,
        expected: usize,
        found: usize,
    },

    /// The output sink refused a write.
    Format,
}

/// Configuration field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Width,
    PanelHeight,
    FontSize,
    BarWidth,
    Headroom,
    TextBarWidth,
}

/// Why a configuration field was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigReason {
    Zero,
    MarginsExceedSize { size: u32, margins: u32 },
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPanels => write!(f, "no comparisons to draw"),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid chart config {field}: {reason}")
            }
            Self::BarsOverflowCategory {
                libraries,
                bar_width,
            } => {
                write!(
                    f,
                    "{libraries} bars of width {bar_width} do not fit in one category"
                )
            }
            Self::SeriesLengthMismatch {
                library,
                expected,
                found,
            } => {
                write!(
                    f,
                    "series {library} has {found} values for {expected} categories"
                )
            }
            Self::Format => write!(f, "failed to write chart output"),
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Width => "width",
            Self::PanelHeight => "panel height",
            Self::FontSize => "font size",
            Self::BarWidth => "bar width",
            Self::Headroom => "headroom",
            Self::TextBarWidth => "text bar width",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ConfigReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "must be non-zero"),
            Self::MarginsExceedSize { size, margins } => {
                write!(f, "{size} leaves no room after {margins} of margins")
            }
            Self::OutOfRange { value, min, max } => {
                write!(f, "{value} outside [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for ChartError {}

impl From<fmt::Error> for ChartError {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}
