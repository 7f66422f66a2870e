// File: crates/csv-chart/src/axis.rs
// Summary: Axis model with label and visible range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Empty labels are not drawn.
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("", 0.0, 1.0) }

    pub fn span(&self) -> f64 { self.max - self.min }
}
