// File: crates/csv-chart/src/plot.rs
// Summary: Builds a line chart of every column against the last one and renders CSV files to SVG.

use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::{Chart, RenderOptions, DEFAULT_Y_MARGIN};
use crate::error::Error;
use crate::table::Table;
use crate::{Axis, Series};

/// What a render run plotted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotSummary {
    pub x_column: String,
    pub y_columns: Vec<String>,
    pub rows: usize,
}

/// One line per column before the last, each plotted against the last column.
/// Line order follows the header order.
pub fn line_chart(table: &Table) -> Result<Chart, Error> {
    let (x, ys) = match table.split_last() {
        Some((x, ys)) if !ys.is_empty() => (x, ys),
        _ => return Err(Error::TooFewColumns { found: table.ncols() }),
    };

    let mut chart = Chart::new();
    for y in ys {
        let series = Series::from_columns(y.name.clone(), &x.values, &y.values);
        if series.finite_points().nth(1).is_none() {
            log::warn!("column '{}' has fewer than two plottable points; no line drawn", y.name);
        }
        chart.add_series(series);
    }
    chart.x_axis = Axis::new(x.name.clone(), 0.0, 1.0);
    chart.y_axis = Axis::new("", 0.0, 1.0);
    chart.autoscale_axes(DEFAULT_Y_MARGIN);
    Ok(chart)
}

/// Load `input`, plot it with [`line_chart`] and write the SVG to `output`.
///
/// The output file is only touched once the chart has rendered successfully;
/// an existing file is overwritten.
pub fn render_csv_to_svg(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    opts: &RenderOptions,
) -> Result<PlotSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let table = Table::from_path(input)
        .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    let chart = line_chart(&table)
        .with_context(|| format!("cannot plot '{}'", input.display()))?;

    let summary = PlotSummary {
        x_column: chart.x_axis.label.clone(),
        y_columns: chart.series.iter().map(|s| s.name.clone()).collect(),
        rows: table.nrows(),
    };
    log::debug!(
        "plotting {:?} against '{}' over {} rows",
        summary.y_columns,
        summary.x_column,
        summary.rows
    );

    chart
        .render_to_svg(opts, output)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(summary)
}
