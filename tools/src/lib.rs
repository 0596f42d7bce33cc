//! Command-line tooling for relbench charts.
//!
//! This crate wires the dataset, comparison and chart crates together:
//!
//! - Build the reference comparison (every metric against the baseline)
//! - Render it to SVG and write it to disk
//! - Format the normalized table as aligned text or JSON
//! - Set up `tracing` output for the binary
//!
//! # Design Principles
//!
//! - **Hardcoded data** - The chart always shows the reference table.
//! - **Human-readable output** - Text output lines up by column.

mod logging;
mod report;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chart::{ChartConfig, Figure, Palette};
use compare::Comparison;
use dataset::{reference, Library};

pub use logging::{init_logging, LOG_ENV};
pub use report::{format_pretty, Report};

/// Default location of the rendered chart, relative to the working directory.
pub const DEFAULT_CHART_PATH: &str = "target/relbench/relative_performance.svg";

/// Normalizes the reference table against the reference baseline.
pub fn reference_comparisons() -> Result<Vec<Comparison>> {
    let table = reference::ser20_binary().context("build reference table")?;
    tracing::debug!(
        scenarios = table.len(),
        libraries = table.libraries().len(),
        "loaded reference table"
    );
    let baseline = Library::new(reference::BASELINE);
    let comparisons =
        compare::normalize_all(&table, &baseline).context("normalize reference table")?;
    for cmp in &comparisons {
        tracing::debug!(
            metric = %cmp.metric,
            baseline = %cmp.baseline,
            tallest = cmp.max_value(),
            "normalized"
        );
    }
    Ok(comparisons)
}

/// Lays out the reference comparisons with the default palette.
pub fn reference_figure(config: &ChartConfig) -> Result<Figure> {
    let comparisons = reference_comparisons()?;
    Figure::layout(&comparisons, config, &Palette::default()).context("lay out chart")
}

/// Renders the reference chart as SVG.
pub fn render_reference_svg(config: &ChartConfig) -> Result<String> {
    let figure = reference_figure(config)?;
    chart::render_svg(&figure, config).context("render svg")
}

/// Renders the reference chart as terminal bars.
pub fn render_reference_text(config: &ChartConfig) -> Result<String> {
    let figure = reference_figure(config)?;
    chart::render_text(&figure, config).context("render text")
}

/// Renders the reference chart and writes it to `path`, creating parent
/// directories as needed.
pub fn write_reference_chart(path: &Path, config: &ChartConfig) -> Result<()> {
    let svg = render_reference_svg(config)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    fs::write(path, svg.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = svg.len(), "wrote chart");
    Ok(())
}
