// File: crates/csv-chart/src/geometry.rs
// Summary: Plot-area rectangle and data-to-pixel mapping.

use skia_safe as skia;

use crate::types::Insets;
use crate::Axis;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// The area left over after removing `insets` from a `width` x `height` canvas.
    /// Insets larger than the canvas collapse to a zero-sized rect instead of inverting.
    pub fn inside(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left);
        let bottom = (height as f32 - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }

    /// Map a data point to canvas pixels; y grows downwards on the canvas.
    pub fn project(&self, x_axis: &Axis, y_axis: &Axis, (x, y): (f64, f64)) -> (f32, f32) {
        (self.project_x(x_axis, x), self.project_y(y_axis, y))
    }

    pub fn project_x(&self, axis: &Axis, x: f64) -> f32 {
        let span = axis.span().max(1e-9);
        self.left + ((x - axis.min) / span) as f32 * self.width()
    }

    pub fn project_y(&self, axis: &Axis, y: f64) -> f32 {
        let span = axis.span().max(1e-9);
        self.bottom - ((y - axis.min) / span) as f32 * self.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_removes_insets() {
        let r = PlotRect::inside(640, 480, &Insets::new(72, 24, 24, 56));
        assert_eq!((r.left, r.top, r.right, r.bottom), (72.0, 24.0, 616.0, 424.0));
    }

    #[test]
    fn oversized_insets_collapse() {
        let r = PlotRect::inside(50, 50, &Insets::new(40, 40, 40, 40));
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
    }

    #[test]
    fn project_flips_y() {
        let r = PlotRect::inside(200, 100, &Insets::new(0, 0, 0, 0));
        let x = Axis::new("x", 0.0, 10.0);
        let y = Axis::new("y", 0.0, 1.0);
        assert_eq!(r.project(&x, &y, (0.0, 0.0)), (0.0, 100.0));
        assert_eq!(r.project(&x, &y, (10.0, 1.0)), (200.0, 0.0));
        assert_eq!(r.project(&x, &y, (5.0, 0.5)), (100.0, 50.0));
    }
}
