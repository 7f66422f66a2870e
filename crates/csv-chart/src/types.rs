// File: crates/csv-chart/src/types.rs
// Summary: Shared sizes and paddings.

/// Default canvas width in SVG user units (pixels).
pub const WIDTH: i32 = 640;
/// Default canvas height in SVG user units (pixels).
pub const HEIGHT: i32 = 480;

/// Margins between the canvas edge and the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
