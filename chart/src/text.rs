//! Terminal rendering with horizontal bars.

use std::fmt::Write;

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::layout::Figure;

const FULL_BLOCK: char = '█';

/// Renders `figure` as horizontal text bars, one block per scenario.
///
/// Bar lengths are scaled to each panel's axis, so bars in the same panel are
/// comparable and the baseline bar has the same length everywhere in it.
pub fn render_text(figure: &Figure, config: &ChartConfig) -> ChartResult<String> {
    config.validate()?;
    let mut out = String::new();
    for (idx, panel) in figure.panels.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} (baseline {})", panel.title, panel.baseline)?;
        let name_width = panel
            .legend
            .iter()
            .map(|entry| entry.library.as_str().chars().count())
            .max()
            .unwrap_or(0);
        for (category, label) in panel.labels.iter().enumerate() {
            writeln!(out, "  {label}")?;
            for bar in panel.category(category) {
                let cells = bar_cells(panel.axis.fraction(bar.value), config.text_bar_width);
                writeln!(
                    out,
                    "    {:<name_width$} {} {:.4}",
                    bar.library.as_str(),
                    FULL_BLOCK.to_string().repeat(cells),
                    bar.value
                )?;
            }
        }
    }
    Ok(out)
}

fn bar_cells(fraction: f64, width: usize) -> usize {
    (fraction * width as f64).round() as usize
}
