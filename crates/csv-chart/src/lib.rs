// File: crates/csv-chart/src/lib.rs
// Summary: Library entry point; CSV table loading, line chart construction and SVG rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod plot;
pub mod series;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions, DEFAULT_Y_MARGIN};
pub use error::Error;
pub use plot::{line_chart, render_csv_to_svg, PlotSummary};
pub use series::Series;
pub use table::{Column, Table};
pub use theme::Theme;
pub use view::ViewState;
