// File: crates/csv-chart/src/series.rs
// Summary: Named XY line series.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Shown in the legend.
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data }
    }

    /// Pair up two equally long value columns point by point.
    pub fn from_columns(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(name, data)
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Split the line into runs of consecutive finite points; NaN/inf break the line.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}
