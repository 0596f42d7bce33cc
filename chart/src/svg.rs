//! SVG rendering.

use std::fmt::{self, Write};

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::layout::{Figure, Panel};

const AXIS_COLOR: &str = "black";
const GRID_COLOR: &str = "#dddddd";

/// Renders `figure` as a standalone SVG document.
pub fn render_svg(figure: &Figure, config: &ChartConfig) -> ChartResult<String> {
    let mut out = String::new();
    write_svg(&mut out, figure, config)?;
    Ok(out)
}

/// Writes `figure` as a standalone SVG document into `out`.
pub fn write_svg<W: Write>(
    out: &mut W,
    figure: &Figure,
    config: &ChartConfig,
) -> ChartResult<()> {
    config.validate()?;
    let width = config.width;
    let height = config.height(figure.panels.len());
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="{}">"#,
        config.font_size
    )?;
    writeln!(
        out,
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
    )?;
    for (idx, panel) in figure.panels.iter().enumerate() {
        let top = config.panel_height.saturating_mul(idx as u32);
        write_panel(out, panel, config, f64::from(top))?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}

/// Pixel rectangle of a panel's plotting area.
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    slot: f64,
}

impl PlotArea {
    fn new(config: &ChartConfig, panel_top: f64, categories: usize) -> Self {
        let left = f64::from(config.margin_left);
        let right = f64::from(config.width - config.margin_right);
        let top = panel_top + f64::from(config.margin_top);
        let bottom = panel_top + f64::from(config.panel_height - config.margin_bottom);
        let slot = (right - left) / categories.max(1) as f64;
        Self {
            left,
            right,
            top,
            bottom,
            slot,
        }
    }

    fn x(&self, data_x: f64) -> f64 {
        self.left + (data_x + 0.5) * self.slot
    }

    fn y(&self, fraction: f64) -> f64 {
        self.bottom - fraction * (self.bottom - self.top)
    }
}

fn write_panel<W: Write>(
    out: &mut W,
    panel: &Panel,
    config: &ChartConfig,
    panel_top: f64,
) -> fmt::Result {
    let area = PlotArea::new(config, panel_top, panel.labels.len());
    let font = f64::from(config.font_size);

    writeln!(out, "<g>")?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{:.1}">{}</text>"#,
        (area.left + area.right) / 2.0,
        panel_top + f64::from(config.margin_top) / 2.0 + font / 2.0,
        font * 1.2,
        escape(&panel.title)
    )?;

    for tick in &panel.axis.ticks {
        let y = area.y(panel.axis.fraction(*tick));
        writeln!(
            out,
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{GRID_COLOR}"/>"#,
            area.left, area.right
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            area.left - 6.0,
            y + font / 3.0,
            format_tick(*tick)
        )?;
    }

    for bar in &panel.bars {
        let x0 = area.x(bar.left());
        let x1 = area.x(bar.right());
        let y = area.y(panel.axis.fraction(bar.value));
        writeln!(
            out,
            r#"<rect x="{x0:.2}" y="{y:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{} {}: {:.4}</title></rect>"#,
            x1 - x0,
            area.bottom - y,
            escape(&bar.color),
            escape(bar.library.as_str()),
            escape(panel.labels.get(bar.category).map_or("", String::as_str)),
            bar.value
        )?;
    }

    writeln!(
        out,
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{AXIS_COLOR}"/>"#,
        area.left, area.top, area.left, area.bottom
    )?;
    writeln!(
        out,
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{AXIS_COLOR}"/>"#,
        area.left, area.bottom, area.right, area.bottom
    )?;

    for (idx, label) in panel.labels.iter().enumerate() {
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            area.x(idx as f64),
            area.bottom + font * 1.5,
            escape(label)
        )?;
    }

    if panel.show_legend {
        write_legend(out, panel, &area, font)?;
    }
    writeln!(out, "</g>")
}

fn write_legend<W: Write>(out: &mut W, panel: &Panel, area: &PlotArea, font: f64) -> fmt::Result {
    let longest = panel
        .legend
        .iter()
        .map(|entry| entry.library.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let row = font * 1.5;
    let box_width = font * 2.0 + longest as f64 * font * 0.6 + 8.0;
    let box_height = row * panel.legend.len() as f64 + 8.0;
    let x = area.right - box_width - 8.0;
    let y = area.top + 8.0;

    writeln!(
        out,
        r#"<rect x="{x:.1}" y="{y:.1}" width="{box_width:.1}" height="{box_height:.1}" fill="white" stroke="{GRID_COLOR}"/>"#
    )?;
    for (idx, entry) in panel.legend.iter().enumerate() {
        let row_top = y + 4.0 + row * idx as f64;
        writeln!(
            out,
            r#"<rect x="{:.1}" y="{:.1}" width="{font:.1}" height="{:.1}" fill="{}"/>"#,
            x + 4.0,
            row_top + row * 0.15,
            font * 0.7,
            escape(&entry.color)
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
            x + 8.0 + font * 1.2,
            row_top + font,
            escape(entry.library.as_str())
        )?;
    }
    Ok(())
}

/// Formats a tick value with at most two decimals and no trailing zeros.
pub(crate) fn format_tick(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Escapes XML special characters in text and attribute content.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
