// File: crates/csv-chart/src/chart.rs
// Summary: Chart struct and headless SVG rendering pipeline using Skia's SVG canvas.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::grid::{linspace, nice_ticks};
use crate::legend::{draw_legend, legend_items};
use crate::series::Series;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// matplotlib pads the value axis by 5% of the data span on each side.
pub const DEFAULT_Y_MARGIN: f64 = 0.05;

const TICK_COUNT: u32 = 6;
const TICK_LEN: f32 = 4.0;
const TICK_FONT_SIZE: f32 = 11.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const LINE_WIDTH: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and axis titles.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub draw_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_legend: true,
            draw_grid: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, keeping the axis labels.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Render the chart into an in-memory SVG document.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        anyhow::ensure!(
            opts.width > 0 && opts.height > 0,
            "invalid canvas size {}x{}",
            opts.width,
            opts.height
        );
        let bounds = skia::Rect::from_iwh(opts.width, opts.height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        let data = canvas.end();
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to an SVG file at `output_svg_path`, replacing any existing file.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = output_svg_path.as_ref();
        let bytes = self.render_to_svg_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = PlotRect::inside(opts.width, opts.height, &opts.insets);
        let shaper = TextShaper::new();

        // Background
        canvas.clear(theme.background);

        if opts.draw_grid {
            draw_grid(canvas, plot, theme);
        }
        draw_frame(canvas, plot, theme);
        draw_ticks(canvas, plot, &self.x_axis, &self.y_axis, theme, &shaper, opts.draw_labels);
        if opts.draw_labels {
            draw_axis_labels(canvas, plot, &self.x_axis, &self.y_axis, theme, &shaper);
        }

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, Some(true));
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, plot, &self.x_axis, &self.y_axis, s, theme.series_color(i));
        }
        canvas.restore();

        if opts.draw_legend {
            draw_legend(canvas, plot, &legend_items(&self.series, theme), theme, &shaper);
        }
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 0.8);

    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, 10) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    // horizontals
    for y in linspace(plot.top as f64, plot.bottom as f64, 6) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: PlotRect, theme: &Theme) {
    canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.axis_line, 1.0));
}

fn draw_ticks(
    canvas: &skia::Canvas,
    plot: PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
    with_labels: bool,
) {
    let paint = stroke_paint(theme.tick, 1.0);

    let xt = nice_ticks(x_axis.min, x_axis.max, TICK_COUNT);
    for &v in &xt.values {
        let px = plot.project_x(x_axis, v);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + TICK_LEN), &paint);
        if with_labels {
            let pos = (px, plot.bottom + TICK_LEN + TICK_FONT_SIZE + 2.0);
            shaper.draw(canvas, &xt.label(v), pos, TICK_FONT_SIZE, theme.axis_label, Align::Center);
        }
    }

    let yt = nice_ticks(y_axis.min, y_axis.max, TICK_COUNT);
    for &v in &yt.values {
        let py = plot.project_y(y_axis, v);
        canvas.draw_line((plot.left - TICK_LEN, py), (plot.left, py), &paint);
        if with_labels {
            let pos = (plot.left - TICK_LEN - 3.0, py + TICK_FONT_SIZE * 0.35);
            shaper.draw(canvas, &yt.label(v), pos, TICK_FONT_SIZE, theme.axis_label, Align::Right);
        }
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    plot: PlotRect,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let x_pos = (plot.left + plot.width() * 0.5, plot.bottom + 44.0);
    shaper.draw(canvas, &x.label, x_pos, LABEL_FONT_SIZE, theme.axis_label, Align::Center);

    if !y.label.is_empty() {
        // Rotated a quarter turn, reading bottom to top along the left edge.
        canvas.save();
        canvas.translate((plot.left - 52.0, plot.top + plot.height() * 0.5));
        canvas.rotate(-90.0, None);
        shaper.draw(canvas, &y.label, (0.0, 0.0), LABEL_FONT_SIZE, theme.axis_label, Align::Center);
        canvas.restore();
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let mut path = skia::Path::new();
    for run in series.segments().into_iter().filter(|run| run.len() >= 2) {
        path.move_to(plot.project(x_axis, y_axis, run[0]));
        for &p in &run[1..] {
            path.line_to(plot.project(x_axis, y_axis, p));
        }
    }
    if path.is_empty() {
        return;
    }

    let mut stroke = stroke_paint(color, LINE_WIDTH);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}
