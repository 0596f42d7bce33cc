//! Grouped bar layout in data coordinates.
//!
//! Categories sit at integer x positions `0..n`. Each category holds one bar
//! per library, centered as a group on the category position. Renderers map
//! these coordinates onto their own surface.

use compare::Comparison;
use dataset::{Library, Metric};

use crate::config::{ChartConfig, Palette};
use crate::error::{ChartError, ChartResult};

/// Tolerance when checking that a bar group fits its category slot.
const SLOT_EPSILON: f64 = 1e-9;

/// Number of intervals between y-axis ticks.
const TICK_INTERVALS: u32 = 5;

/// Mantissas for y-axis upper bounds.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// A vertical axis from zero to `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub max: f64,
    /// Tick values from 0 to `max` inclusive.
    pub ticks: Vec<f64>,
}

impl Axis {
    /// Picks a round upper bound that covers `tallest` plus `headroom`.
    #[must_use]
    pub fn covering(tallest: f64, headroom: f64) -> Self {
        let max = nice_upper_bound(tallest * (1.0 + headroom));
        let ticks = (0..=TICK_INTERVALS)
            .map(|i| max * f64::from(i) / f64::from(TICK_INTERVALS))
            .collect();
        Self { max, ticks }
    }

    /// Fraction of the axis covered by `value`, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value / self.max).clamp(0.0, 1.0)
    }
}

fn nice_upper_bound(target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(target.log10().floor());
    let step = NICE_STEPS
        .iter()
        .copied()
        .find(|step| step * magnitude >= target)
        .unwrap_or(10.0);
    (step * magnitude).max(target)
}

/// One bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub library: Library,
    /// Index into `Panel::labels`.
    pub category: usize,
    /// Center of the bar on the x axis.
    pub center: f64,
    pub width: f64,
    pub value: f64,
    pub color: String,
}

impl Bar {
    /// Left edge on the x axis.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center - self.width / 2.0
    }

    /// Right edge on the x axis.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

/// A legend row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub library: Library,
    pub color: String,
}

/// One subplot covering a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub metric: Metric,
    pub title: String,
    pub baseline: Library,
    /// X tick labels, one per category.
    pub labels: Vec<String>,
    /// Bars grouped by category, libraries in table order within a group.
    pub bars: Vec<Bar>,
    pub axis: Axis,
    pub legend: Vec<LegendEntry>,
    pub show_legend: bool,
}

impl Panel {
    /// Bars belonging to category `idx`.
    pub fn category(&self, idx: usize) -> impl Iterator<Item = &Bar> + '_ {
        self.bars.iter().filter(move |bar| bar.category == idx)
    }
}

/// Panels stacked top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Lays out one panel per comparison, in the given order.
    pub fn layout(
        comparisons: &[Comparison],
        config: &ChartConfig,
        palette: &Palette,
    ) -> ChartResult<Self> {
        config.validate()?;
        if comparisons.is_empty() {
            return Err(ChartError::NoPanels);
        }
        let panels = comparisons
            .iter()
            .map(|cmp| layout_panel(cmp, config, palette))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { panels })
    }

    /// Returns the panel for `metric`, if present.
    #[must_use]
    pub fn panel(&self, metric: Metric) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.metric == metric)
    }
}

/// Offset of bar `index` from its category center when `count` bars share it.
#[must_use]
pub fn bar_offset(index: usize, count: usize, bar_width: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * bar_width
}

/// Title shown above a metric's panel.
#[must_use]
pub fn panel_title(metric: Metric) -> String {
    format!("Relative performance: {metric}")
}

fn layout_panel(cmp: &Comparison, config: &ChartConfig, palette: &Palette) -> ChartResult<Panel> {
    let count = cmp.series.len();
    if count as f64 * config.bar_width > 1.0 + SLOT_EPSILON {
        return Err(ChartError::BarsOverflowCategory {
            libraries: count,
            bar_width: config.bar_width,
        });
    }

    if let Some(series) = cmp
        .series
        .iter()
        .find(|series| series.values.len() != cmp.labels.len())
    {
        return Err(ChartError::SeriesLengthMismatch {
            library: series.library.clone(),
            expected: cmp.labels.len(),
            found: series.values.len(),
        });
    }

    let legend: Vec<LegendEntry> = cmp
        .series
        .iter()
        .enumerate()
        .map(|(idx, series)| LegendEntry {
            library: series.library.clone(),
            color: palette.color_for(&series.library, idx).to_string(),
        })
        .collect();

    let mut bars = Vec::with_capacity(count * cmp.labels.len());
    for category in 0..cmp.labels.len() {
        for (idx, (series, entry)) in cmp.series.iter().zip(&legend).enumerate() {
            bars.push(Bar {
                library: series.library.clone(),
                category,
                center: category as f64 + bar_offset(idx, count, config.bar_width),
                width: config.bar_width,
                value: series.values[category],
                color: entry.color.clone(),
            });
        }
    }

    Ok(Panel {
        metric: cmp.metric,
        title: panel_title(cmp.metric),
        baseline: cmp.baseline.clone(),
        labels: cmp.labels.clone(),
        bars,
        axis: Axis::covering(cmp.max_value(), config.headroom),
        legend,
        show_legend: cmp.metric == config.legend_panel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use compare::RelativeSeries;

    fn comparison(metric: Metric) -> Comparison {
        Comparison {
            metric,
            baseline: Library::new("Cereal"),
            labels: vec!["double".to_string(), "PoDStruct".to_string()],
            series: vec![
                RelativeSeries {
                    library: Library::new("Boost"),
                    values: vec![1.0066, 1.3659],
                },
                RelativeSeries {
                    library: Library::new("Cereal"),
                    values: vec![1.0, 1.0],
                },
                RelativeSeries {
                    library: Library::new("Ser20"),
                    values: vec![1.0013, 0.5021],
                },
            ],
        }
    }

    #[test]
    fn bar_offsets_are_centered() {
        let offsets: Vec<f64> = (0..3).map(|i| bar_offset(i, 3, 0.1)).collect();
        assert!((offsets[0] + 0.1).abs() < 1e-12);
        assert!(offsets[1].abs() < 1e-12);
        assert!((offsets[2] - 0.1).abs() < 1e-12);
        assert!(bar_offset(0, 1, 0.5).abs() < 1e-12);
    }

    #[test]
    fn axis_bounds_are_round() {
        assert_eq!(Axis::covering(1.3659, 0.1).max, 2.0);
        assert_eq!(Axis::covering(2.0655, 0.1).max, 2.5);
        assert_eq!(Axis::covering(0.9, 0.0).max, 1.0);
        assert_eq!(Axis::covering(4.2, 0.1).max, 5.0);
        assert_eq!(Axis::covering(12.0, 0.0).max, 20.0);
        assert!((Axis::covering(0.03, 0.0).max - 0.05).abs() < 1e-12);
    }

    #[test]
    fn axis_degenerate_values() {
        assert_eq!(Axis::covering(0.0, 0.1).max, 1.0);
        assert_eq!(Axis::covering(f64::NAN, 0.1).max, 1.0);
    }

    #[test]
    fn axis_ticks_span_zero_to_max() {
        let axis = Axis::covering(1.3659, 0.1);
        assert_eq!(axis.ticks.len(), 6);
        assert_eq!(axis.ticks[0], 0.0);
        assert_eq!(*axis.ticks.last().unwrap(), axis.max);
    }

    #[test]
    fn axis_fraction_clamps() {
        let axis = Axis::covering(1.0, 0.0);
        assert_eq!(axis.fraction(0.5), 0.5);
        assert_eq!(axis.fraction(3.0), 1.0);
        assert_eq!(axis.fraction(-1.0), 0.0);
    }

    #[test]
    fn figure_lays_out_one_panel_per_comparison() {
        let cmps = vec![comparison(Metric::Load), comparison(Metric::Save)];
        let figure = Figure::layout(&cmps, &ChartConfig::default(), &Palette::default()).unwrap();
        assert_eq!(figure.panels.len(), 2);
        assert_eq!(figure.panels[0].title, "Relative performance: load");
        assert_eq!(figure.panels[1].title, "Relative performance: save");
        assert!(figure.panel(Metric::Load).unwrap().show_legend);
        assert!(!figure.panel(Metric::Save).unwrap().show_legend);
    }

    #[test]
    fn panel_bars_are_grouped_by_category() {
        let cmps = vec![comparison(Metric::Save)];
        let figure = Figure::layout(&cmps, &ChartConfig::default(), &Palette::default()).unwrap();
        let panel = &figure.panels[0];
        assert_eq!(panel.bars.len(), 6);

        let group: Vec<_> = panel.category(1).collect();
        assert_eq!(group.len(), 3);
        assert_eq!(group[0].library, "Boost");
        assert_eq!(group[0].color, "gray");
        assert_eq!(group[1].color, "blue");
        assert_eq!(group[2].color, "red");
        assert!((group[0].center - 0.9).abs() < 1e-12);
        assert!((group[1].center - 1.0).abs() < 1e-12);
        assert!((group[2].value - 0.5021).abs() < 1e-12);
    }

    #[test]
    fn legend_follows_series_order() {
        let cmps = vec![comparison(Metric::Load)];
        let figure = Figure::layout(&cmps, &ChartConfig::default(), &Palette::default()).unwrap();
        let names: Vec<_> = figure.panels[0]
            .legend
            .iter()
            .map(|entry| entry.library.as_str())
            .collect();
        assert_eq!(names, vec!["Boost", "Cereal", "Ser20"]);
    }

    #[test]
    fn no_comparisons_is_an_error() {
        let err = Figure::layout(&[], &ChartConfig::default(), &Palette::default()).unwrap_err();
        assert_eq!(err, ChartError::NoPanels);
    }

    #[test]
    fn too_many_bars_overflow() {
        let config = ChartConfig {
            bar_width: 0.4,
            ..ChartConfig::default()
        };
        let err = Figure::layout(&[comparison(Metric::Load)], &config, &Palette::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ChartError::BarsOverflowCategory { libraries: 3, .. }
        ));
    }

    #[test]
    fn short_series_is_rejected() {
        let mut cmp = comparison(Metric::Load);
        cmp.series[2].values.pop();
        let err = Figure::layout(&[cmp], &ChartConfig::default(), &Palette::default())
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::SeriesLengthMismatch {
                library: Library::new("Ser20"),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn long_series_is_rejected() {
        let mut cmp = comparison(Metric::Save);
        cmp.series[0].values.push(3.0);
        let err = Figure::layout(&[cmp], &ChartConfig::default(), &Palette::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ChartError::SeriesLengthMismatch {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn invalid_config_is_reported_before_layout() {
        let config = ChartConfig {
            font_size: 0,
            ..ChartConfig::default()
        };
        let err = Figure::layout(&[comparison(Metric::Load)], &config, &Palette::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig { .. }));
    }
}
