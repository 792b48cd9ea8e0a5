use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;

use crate::error::{PrepError, Result};
use crate::stats::BoxStats;

// ---------------------------------------------------------------------------
// Static box plot (PNG)
// ---------------------------------------------------------------------------

pub const IMAGE_SIZE: (u32, u32) = (1000, 600);
pub const TITLE: &str = "BoxPlot of dex_size (in MB) - Outliers Removed";
pub const X_LABEL: &str = "dex_size (MB)";

const FONT_FAMILY: &str = "sans-serif";
const TITLE_SIZE: u32 = 24;
const MARGIN: u32 = 20;

const BOX_FILL: RGBColor = RGBColor(76, 114, 176);
/// Vertical extent of the box on the unit y axis.
const BOX_LOW: f64 = 0.3;
const BOX_HIGH: f64 = 0.7;
const CAP_LOW: f64 = 0.4;
const CAP_HIGH: f64 = 0.6;

/// Make the embedded UI font available to plotters under [`FONT_FAMILY`].
///
/// Re-registering replaces the same entry, so calling this per render is fine.
pub fn register_fonts() -> std::result::Result<(), String> {
    register_font(
        FONT_FAMILY,
        FontStyle::Normal,
        epaint_default_fonts::UBUNTU_LIGHT,
    )
    .map_err(|_| format!("embedded font for '{FONT_FAMILY}' could not be parsed"))
}

/// Render a horizontal box plot of `values` to a PNG at `path`.
///
/// Empty `values` still produce an image with the title, axes and grid.
pub fn render_box_plot(values: &[f64], path: &Path) -> Result<()> {
    let render_err = |message: String| PrepError::Render {
        path: path.to_path_buf(),
        message,
    };

    register_fonts().map_err(render_err)?;

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    draw_box_plot(&root, values).map_err(|e| render_err(e.to_string()))?;
    root.present().map_err(|e| render_err(e.to_string()))?;

    log::info!("Box plot saved to {}", path.display());
    Ok(())
}

/// Draw the chart onto any plotters backend.
fn draw_box_plot<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    values: &[f64],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let stats = BoxStats::from_values(values);
    let (x_min, x_max) = axis_range(stats.as_ref());

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (FONT_FAMILY, TITLE_SIZE))
        .margin(MARGIN)
        .x_label_area_size(50)
        .y_label_area_size(10)
        .build_cartesian_2d(x_min..x_max, 0f64..1f64)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_labels(0)
        .label_style((FONT_FAMILY, 14))
        .axis_desc_style((FONT_FAMILY, 16))
        .light_line_style(BLACK.mix(0.08))
        .bold_line_style(BLACK.mix(0.2))
        .draw()?;

    let Some(b) = stats else {
        log::warn!("No values to plot; writing an empty box plot");
        return Ok(());
    };

    let line = BLACK.stroke_width(2);
    let mid = (BOX_LOW + BOX_HIGH) / 2.0;

    chart.draw_series([
        Rectangle::new([(b.q1, BOX_LOW), (b.q3, BOX_HIGH)], BOX_FILL.filled()),
        Rectangle::new([(b.q1, BOX_LOW), (b.q3, BOX_HIGH)], line),
    ])?;

    chart.draw_series([
        // median
        PathElement::new(vec![(b.median, BOX_LOW), (b.median, BOX_HIGH)], line),
        // whiskers
        PathElement::new(vec![(b.lower_whisker, mid), (b.q1, mid)], line),
        PathElement::new(vec![(b.q3, mid), (b.upper_whisker, mid)], line),
        // caps
        PathElement::new(
            vec![(b.lower_whisker, CAP_LOW), (b.lower_whisker, CAP_HIGH)],
            line,
        ),
        PathElement::new(
            vec![(b.upper_whisker, CAP_LOW), (b.upper_whisker, CAP_HIGH)],
            line,
        ),
    ])?;

    Ok(())
}

/// X range covering both whiskers with a 5% margin.
fn axis_range(stats: Option<&BoxStats>) -> (f64, f64) {
    let Some(b) = stats else {
        return (0.0, 1.0);
    };
    let span = b.upper_whisker - b.lower_whisker;
    let pad = if span > f64::EPSILON {
        span * 0.05
    } else {
        b.median.abs().max(1.0) * 0.05
    };
    (b.lower_whisker - pad, b.upper_whisker + pad)
}
