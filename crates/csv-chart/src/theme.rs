// File: crates/csv-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series color cycle.

use skia_safe as skia;

/// matplotlib's default "tab10" line colors, in cycle order.
const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4), // blue
    skia::Color::new(0xffff7f0e), // orange
    skia::Color::new(0xff2ca02c), // green
    skia::Color::new(0xffd62728), // red
    skia::Color::new(0xff9467bd), // purple
    skia::Color::new(0xff8c564b), // brown
    skia::Color::new(0xffe377c2), // pink
    skia::Color::new(0xff7f7f7f), // gray
    skia::Color::new(0xffbcbd22), // olive
    skia::Color::new(0xff17becf), // cyan
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub series: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            series: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            series: TAB10,
        }
    }

    /// Color for the `index`-th series; wraps around after the last entry.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series[index % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
