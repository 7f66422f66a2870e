// File: crates/csv-chart/src/grid.rs
// Summary: Grid spacing and "nice" tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions for one axis and the number of decimals needed to print them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub precision: usize,
}

impl Ticks {
    pub fn label(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

/// Ticks on a 1, 2, 2.5 or 5 x 10^k step that lie inside `[min, max]`.
/// Aims for roughly `count` intervals.
pub fn nice_ticks(min: f64, max: f64, count: u32) -> Ticks {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return Ticks { values: if lo.is_finite() { vec![lo] } else { Vec::new() }, precision: 0 };
    }

    let raw = span / f64::from(count);
    let k = raw.log10().floor();
    let base = raw / 10f64.powf(k);
    let nice = match base {
        b if b <= 1.0 => 1.0,
        b if b <= 2.0 => 2.0,
        b if b <= 2.5 => 2.5,
        b if b <= 5.0 => 5.0,
        _ => 10.0,
    };
    let step = nice * 10f64.powf(k);

    // 2.5 x 10^k needs one more decimal than the exponent alone suggests.
    let extra = if nice == 2.5 { 1 } else { 0 };
    let precision = ((-k) as i64 + extra).max(0) as usize;

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let round = 10f64.powi(precision as i32 + 2);
    let values = (first..=last)
        .map(|i| (i as f64 * step * round).round() / round)
        .collect();

    Ticks { values, precision }
}
