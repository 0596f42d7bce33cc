//! Grouped bar chart layout and rendering for relbench.
//!
//! This crate turns normalized comparisons into stacked bar-chart panels:
//!
//! - `ChartConfig` and `Palette` for sizes, styling and library colors
//! - `Figure::layout` for bar geometry, axes and legends in data units
//! - `render_svg` for a standalone SVG document
//! - `render_text` for terminal output
//!
//! # Design Principles
//!
//! - **Layout is data** - Geometry is computed once and shared by renderers.
//! - **Centered groups** - Bars for one scenario sit symmetrically around it.
//! - **No drawing backend** - SVG is written directly as text.

mod config;
mod error;
mod layout;
mod svg;
mod text;

pub use config::{ChartConfig, Palette};
pub use error::{ChartError, ChartResult, ConfigField, ConfigReason};
pub use layout::{bar_offset, panel_title, Axis, Bar, Figure, LegendEntry, Panel};
pub use svg::{render_svg, write_svg};
pub use text::render_text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = ChartConfig::default();
        let _ = ChartConfig::compact();
        let _ = Palette::default();
        let _ = Axis::covering(1.0, 0.1);
        let _: ChartResult<()> = Ok(());
    }

    #[test]
    fn panel_title_format() {
        assert_eq!(
            panel_title(dataset::Metric::Load),
            "Relative performance: load"
        );
    }
}
