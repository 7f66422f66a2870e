// File: crates/csv-chart/src/legend.rs
// Summary: Upper-right legend box listing each series with a line sample.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::Series;

const MARGIN: f32 = 10.0;
const PADDING: f32 = 8.0;
const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 18.0;
const MARKER_WIDTH: f32 = 28.0;
const MARKER_GAP: f32 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: skia::Color,
}

/// One item per series, in series order, colored like the drawn lines.
pub fn legend_items(series: &[Series], theme: &Theme) -> Vec<LegendItem> {
    series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendItem { label: s.name.clone(), color: theme.series_color(i) })
        .collect()
}

pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: PlotRect,
    items: &[LegendItem],
    theme: &Theme,
    shaper: &TextShaper,
) {
    if items.is_empty() {
        return;
    }

    let text_width = items
        .iter()
        .map(|it| shaper.measure_width(&it.label, FONT_SIZE))
        .fold(0.0_f32, f32::max);
    let inner_width = MARKER_WIDTH + MARKER_GAP + text_width;
    let inner_height = items.len() as f32 * LINE_HEIGHT;

    let rect = skia::Rect::from_ltrb(
        plot.right - MARGIN - PADDING * 2.0 - inner_width,
        plot.top + MARGIN,
        plot.right - MARGIN,
        plot.top + MARGIN + PADDING * 2.0 + inner_height,
    );
    let rrect = skia::RRect::new_rect_xy(rect, 4.0, 4.0);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_rrect(rrect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rrect(rrect, &border);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Stroke);
    marker.set_stroke_width(2.0);

    for (i, item) in items.iter().enumerate() {
        let mid_y = rect.top + PADDING + (i as f32 + 0.5) * LINE_HEIGHT;
        let x0 = rect.left + PADDING;

        marker.set_color(item.color);
        canvas.draw_line((x0, mid_y), (x0 + MARKER_WIDTH, mid_y), &marker);

        // Baseline sits a little below the row's middle so the glyphs look centered.
        let baseline = mid_y + FONT_SIZE * 0.35;
        shaper.draw(
            canvas,
            &item.label,
            (x0 + MARKER_WIDTH + MARKER_GAP, baseline),
            FONT_SIZE,
            theme.axis_label,
            Align::Left,
        );
    }
}
