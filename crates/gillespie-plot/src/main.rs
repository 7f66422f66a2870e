// File: crates/gillespie-plot/src/main.rs
// Summary: Renders gillespie.csv as a line chart (every column against the last) to plot.svg.

use anyhow::Result;
use csv_chart::{render_csv_to_svg, RenderOptions};

const INPUT: &str = "gillespie.csv";
const OUTPUT: &str = "plot.svg";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let summary = render_csv_to_svg(INPUT, OUTPUT, &RenderOptions::default())?;
    log::info!(
        "{} rows, {} lines against '{}'",
        summary.rows,
        summary.y_columns.len(),
        summary.x_column
    );
    Ok(())
}
