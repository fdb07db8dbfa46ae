use std::ops::Range;
use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::data::model::Dataset;
use crate::data::transform::DerivedSeries;

use super::style;

// ---------------------------------------------------------------------------
// Hardware boundaries
// ---------------------------------------------------------------------------

/// Combined L1 data-cache capacity; latency leaves L1 past this size.
pub const L1_L2_KIB: f64 = 192.0;

/// Effective TLB reach for a sequential sweep; page walks dominate beyond.
pub const TLB_KIB: f64 = 12288.0;

const BOUNDARIES: [(f64, &str); 2] = [
    (L1_L2_KIB, "L1 → L2 boundary (~192 KiB)"),
    (TLB_KIB, "TLB / page-walk limit (~12 MiB)"),
];

// ---------------------------------------------------------------------------
// Figure geometry
// ---------------------------------------------------------------------------

// 12×10 in at 300 DPI.
const WIDTH_PX: u32 = 3600;
const HEIGHT_PX: u32 = 3000;

/// Multiplicative padding applied to both ends of a log-scale range.
const RANGE_PAD: f64 = 1.5;

/// Axis range used when a panel has no finite positive data to span.
const FALLBACK_RANGE: Range<f64> = 1.0..10.0;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// One of the two stacked panels.
struct Panel<'a> {
    title: &'a str,
    y_desc: &'a str,
    x_desc: &'a str,
    /// False on the top panel: the x axis is shared, so only the bottom
    /// panel carries tick labels and the axis description.
    draw_x_labels: bool,
    series: [(&'a str, &'a [f64]); 2],
}

/// Render the two-panel log-log figure and persist it as a PNG.
///
/// Top panel: latency per access vs working-set size. Bottom panel: access
/// efficiency vs working-set size. Both panels share the x range and carry
/// dashed verticals at the hardware boundaries.
pub fn render(dataset: &Dataset, derived: &DerivedSeries, path: &Path) -> Result<()> {
    let warm_ns: Vec<f64> = dataset.samples().iter().map(|s| s.warm_ns).collect();
    let cold_ns: Vec<f64> = dataset.samples().iter().map(|s| s.cold_ns).collect();
    let colors = style::series_palette(2);

    let root = BitMapBackend::new(path, (WIDTH_PX, HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let (top, bottom) = root.split_vertically((HEIGHT_PX / 2) as i32);
    let x_range = log_range(&[&derived.x_kib]);

    draw_panel(
        &top,
        &Panel {
            title: "Cache / TLB Access Latency vs Working Set Size (log-log scale)",
            y_desc: "Latency per access [ns]",
            x_desc: "",
            draw_x_labels: false,
            series: [("Warm cache", &warm_ns), ("Cold cache", &cold_ns)],
        },
        &derived.x_kib,
        &x_range,
        &colors,
    )?;

    draw_panel(
        &bottom,
        &Panel {
            title: "Access Efficiency vs Working Set Size (log-log scale)",
            y_desc: "Access efficiency [KiB / ns]",
            x_desc: "Working set size [KiB]",
            draw_x_labels: true,
            series: [
                ("Warm cache efficiency", &derived.warm_eff),
                ("Cold cache efficiency", &derived.cold_eff),
            ],
        },
        &derived.x_kib,
        &x_range,
        &colors,
    )?;

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &Panel,
    x_kib: &[f64],
    x_range: &Range<f64>,
    colors: &[RGBColor],
) -> Result<()> {
    let y_range = log_range(&[panel.series[0].1, panel.series[1].1]);

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, (style::FONT, style::TITLE_SIZE))
        .margin(40)
        .x_label_area_size(if panel.draw_x_labels { 120 } else { 50 })
        .y_label_area_size(180)
        .build_cartesian_2d(x_range.clone().log_scale(), y_range.clone().log_scale())?;

    let hide_x_labels = |_: &f64| String::new();
    let mut mesh = chart.configure_mesh();
    mesh.bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.08))
        .x_label_style((style::FONT, style::TICK_SIZE))
        .y_label_style((style::FONT, style::TICK_SIZE))
        .axis_desc_style((style::FONT, style::LABEL_SIZE))
        .y_desc(panel.y_desc);
    if panel.draw_x_labels {
        mesh.x_desc(panel.x_desc);
    } else {
        mesh.x_label_formatter(&hide_x_labels);
    }
    mesh.draw()?;

    for ((name, values), color) in panel.series.iter().zip(colors) {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                x_kib.iter().copied().zip(values.iter().copied()),
                color.stroke_width(style::SERIES_STROKE),
            ))?
            .label(*name)
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 60, y)],
                    color.stroke_width(style::SERIES_STROKE),
                )
            });
    }

    // Reference verticals. The axis limits stay data-driven; a boundary
    // outside the range is skipped, not drawn across the margin.
    for (x, label) in BOUNDARIES {
        if !x_range.contains(&x) {
            continue;
        }
        chart
            .draw_series(DashedLineSeries::new(
                vec![(x, y_range.start), (x, y_range.end)],
                20,
                12,
                style::BOUNDARY_COLOR.stroke_width(style::BOUNDARY_STROKE),
            ))?
            .label(label)
            .legend(move |(lx, ly)| {
                PathElement::new(
                    vec![(lx, ly), (lx + 60, ly)],
                    style::BOUNDARY_COLOR.stroke_width(style::BOUNDARY_STROKE),
                )
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::LABEL_SIZE))
        .draw()?;

    Ok(())
}

/// Log-scale axis range spanning every finite positive value of the given
/// series, padded multiplicatively. Non-finite and non-positive values
/// cannot anchor a log axis and are ignored here; the series themselves are
/// still handed to the backend untouched.
fn log_range(series: &[&[f64]]) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = 0.0_f64;
    for values in series {
        for &v in *values {
            if v.is_finite() && v > 0.0 {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if lo > hi {
        return FALLBACK_RANGE;
    }
    (lo / RANGE_PAD)..(hi * RANGE_PAD)
}
