//! Chart sizing, styling and colors.

use dataset::{Library, Metric};

use crate::error::{ChartError, ChartResult, ConfigField, ConfigReason};

/// Layout and styling for a stacked relative-performance chart.
///
/// Pixel sizes apply to SVG output. `bar_width` and `headroom` are in data
/// units and affect every renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Height of each panel in pixels.
    pub panel_height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    /// Font size in pixels.
    pub font_size: u32,
    /// Bar width as a fraction of one category slot.
    pub bar_width: f64,
    /// Space above the tallest bar, as a fraction of its height.
    pub headroom: f64,
    /// Columns used by the longest bar in text output.
    pub text_bar_width: usize,
    /// Panel that carries the legend.
    pub legend_panel: Metric,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960,
            panel_height: 360,
            margin_left: 64,
            margin_right: 24,
            margin_top: 40,
            margin_bottom: 48,
            font_size: 12,
            bar_width: 0.1,
            headroom: 0.1,
            text_bar_width: 40,
            legend_panel: Metric::Load,
        }
    }
}

impl ChartConfig {
    /// Creates a small config suitable for terminals and tests.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            width: 480,
            panel_height: 200,
            margin_left: 40,
            margin_right: 8,
            margin_top: 24,
            margin_bottom: 28,
            font_size: 10,
            bar_width: 0.25,
            headroom: 0.1,
            text_bar_width: 20,
            legend_panel: Metric::Load,
        }
    }

    /// Checks that every size leaves room to draw.
    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 {
            return Err(invalid(ConfigField::Width, ConfigReason::Zero));
        }
        let horizontal = self.margin_left.saturating_add(self.margin_right);
        if horizontal >= self.width {
            return Err(invalid(
                ConfigField::Width,
                ConfigReason::MarginsExceedSize {
                    size: self.width,
                    margins: horizontal,
                },
            ));
        }
        if self.panel_height == 0 {
            return Err(invalid(ConfigField::PanelHeight, ConfigReason::Zero));
        }
        let vertical = self.margin_top.saturating_add(self.margin_bottom);
        if vertical >= self.panel_height {
            return Err(invalid(
                ConfigField::PanelHeight,
                ConfigReason::MarginsExceedSize {
                    size: self.panel_height,
                    margins: vertical,
                },
            ));
        }
        if self.font_size == 0 {
            return Err(invalid(ConfigField::FontSize, ConfigReason::Zero));
        }
        if !(self.bar_width > 0.0 && self.bar_width <= 1.0) {
            return Err(invalid(
                ConfigField::BarWidth,
                ConfigReason::OutOfRange {
                    value: self.bar_width,
                    min: 0.0,
                    max: 1.0,
                },
            ));
        }
        if !(self.headroom.is_finite() && self.headroom >= 0.0) {
            return Err(invalid(
                ConfigField::Headroom,
                ConfigReason::OutOfRange {
                    value: self.headroom,
                    min: 0.0,
                    max: f64::MAX,
                },
            ));
        }
        if self.text_bar_width == 0 {
            return Err(invalid(ConfigField::TextBarWidth, ConfigReason::Zero));
        }
        Ok(())
    }

    /// Total SVG height for `panels` stacked panels.
    #[must_use]
    pub const fn height(&self, panels: usize) -> u32 {
        self.panel_height.saturating_mul(panels as u32)
    }
}

const fn invalid(field: ConfigField, reason: ConfigReason) -> ChartError {
    ChartError::InvalidConfig { field, reason }
}

/// Colors used when a library has no explicit entry.
const FALLBACK_COLORS: [&str; 6] = ["green", "orange", "purple", "brown", "teal", "olive"];

/// Library colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(Library, String)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::empty()
            .with("Boost", "gray")
            .with("Cereal", "blue")
            .with("Ser20", "red")
    }
}

impl Palette {
    /// Creates a palette with no explicit colors.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assigns `color` to `library`, replacing any earlier assignment.
    #[must_use]
    pub fn with(mut self, library: impl Into<Library>, color: impl Into<String>) -> Self {
        let library = library.into();
        let color = color.into();
        match self.entries.iter_mut().find(|(lib, _)| *lib == library) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((library, color)),
        }
        self
    }

    /// Returns the color for `library`, which sits at `index` in bar order.
    #[must_use]
    pub fn color_for(&self, library: &Library, index: usize) -> &str {
        self.entries
            .iter()
            .find(|(lib, _)| lib == library)
            .map_or(FALLBACK_COLORS[index % FALLBACK_COLORS.len()], |(_, color)| {
                color.as_str()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ChartConfig::default().validate().is_ok());
        assert!(ChartConfig::compact().validate().is_ok());
    }

    #[test]
    fn compact_is_smaller() {
        let compact = ChartConfig::compact();
        let default = ChartConfig::default();
        assert!(compact.width < default.width);
        assert!(compact.panel_height < default.panel_height);
    }

    #[test]
    fn rejects_zero_width() {
        let config = ChartConfig {
            width: 0,
            ..ChartConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ChartError::InvalidConfig {
                field: ConfigField::Width,
                reason: ConfigReason::Zero
            }
        );
    }

    #[test]
    fn rejects_margins_wider_than_canvas() {
        let config = ChartConfig {
            width: 80,
            ..ChartConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidConfig {
                field: ConfigField::Width,
                reason: ConfigReason::MarginsExceedSize { .. }
            }
        ));
    }

    #[test]
    fn rejects_margins_taller_than_panel() {
        let config = ChartConfig {
            panel_height: 50,
            ..ChartConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ChartError::InvalidConfig {
                field: ConfigField::PanelHeight,
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_bar_width() {
        for bar_width in [0.0, -0.1, 1.01, f64::NAN] {
            let config = ChartConfig {
                bar_width,
                ..ChartConfig::default()
            };
            assert!(
                matches!(
                    config.validate().unwrap_err(),
                    ChartError::InvalidConfig {
                        field: ConfigField::BarWidth,
                        ..
                    }
                ),
                "{bar_width} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_headroom() {
        let config = ChartConfig {
            headroom: f64::INFINITY,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn height_scales_with_panels() {
        let config = ChartConfig::default();
        assert_eq!(config.height(2), 720);
    }

    #[test]
    fn palette_defaults() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(&Library::new("Boost"), 0), "gray");
        assert_eq!(palette.color_for(&Library::new("Cereal"), 1), "blue");
        assert_eq!(palette.color_for(&Library::new("Ser20"), 2), "red");
    }

    #[test]
    fn palette_falls_back_by_index() {
        let palette = Palette::empty();
        assert_eq!(palette.color_for(&Library::new("x"), 0), "green");
        assert_eq!(palette.color_for(&Library::new("x"), 7), "orange");
    }

    #[test]
    fn palette_with_replaces() {
        let palette = Palette::default().with("Boost", "black");
        assert_eq!(palette.color_for(&Library::new("Boost"), 0), "black");
    }
}
