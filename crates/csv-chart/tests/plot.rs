// File: crates/csv-chart/tests/plot.rs
// Purpose: Every-column-against-the-last chart construction and CSV-to-SVG rendering.

use std::path::PathBuf;

use csv_chart::{line_chart, render_csv_to_svg, Error, RenderOptions, Table};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/plot").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

const FIVE_ROWS: &str = "A,B,t\n\
    10,0,0.0\n\
    9,1,0.5\n\
    7,3,1.0\n\
    6,4,1.5\n\
    5,5,2.0\n";

#[test]
fn two_y_series_against_last_column() {
    let table = Table::from_reader(FIVE_ROWS.as_bytes()).unwrap();
    let chart = line_chart(&table).expect("chart");

    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].name, "A");
    assert_eq!(chart.series[1].name, "B");
    assert!(chart.series.iter().all(|s| s.len() == 5));
    assert_eq!(chart.x_axis.label, "t");

    // x values come from the last column
    let xs: Vec<f64> = chart.series[1].data_xy.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    assert_eq!(chart.series[0].data_xy[2], (1.0, 7.0));

    // tight x range, padded y range
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 2.0));
    assert!(chart.y_axis.min < 0.0 && chart.y_axis.max > 10.0);
}

#[test]
fn series_order_follows_header() {
    let table = Table::from_reader("Z,M,A,time\n1,2,3,0\n".as_bytes()).unwrap();
    let chart = line_chart(&table).unwrap();
    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Z", "M", "A"]);
}

#[test]
fn single_column_is_rejected() {
    let table = Table::from_reader("t\n1\n2\n".as_bytes()).unwrap();
    let err = line_chart(&table).unwrap_err();
    assert!(matches!(err, Error::TooFewColumns { found: 1 }));
}

#[test]
fn renders_file_and_overwrites_on_rerun() {
    let dir = scratch_dir("rerun");
    let input = dir.join("gillespie.csv");
    let output = dir.join("plot.svg");
    std::fs::write(&input, FIVE_ROWS).unwrap();

    let summary = render_csv_to_svg(&input, &output, &RenderOptions::default()).expect("first run");
    assert_eq!(summary.x_column, "t");
    assert_eq!(summary.y_columns, ["A", "B"]);
    assert_eq!(summary.rows, 5);
    assert!(std::fs::metadata(&output).unwrap().len() > 0);

    std::fs::write(&output, "old").unwrap();
    render_csv_to_svg(&input, &output, &RenderOptions::default()).expect("second run");
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("<svg"));
}

#[test]
fn missing_input_leaves_output_alone() {
    let dir = scratch_dir("missing");
    let input = dir.join("gillespie.csv");
    let output = dir.join("plot.svg");

    assert!(render_csv_to_svg(&input, &output, &RenderOptions::default()).is_err());
    assert!(!output.exists());

    std::fs::write(&output, "previous").unwrap();
    assert!(render_csv_to_svg(&input, &output, &RenderOptions::default()).is_err());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn malformed_input_reports_file_in_context() {
    let dir = scratch_dir("malformed");
    let input = dir.join("gillespie.csv");
    let output = dir.join("plot.svg");
    std::fs::write(&input, "A,t\n1,0\noops,1\n").unwrap();

    let err = render_csv_to_svg(&input, &output, &RenderOptions::default()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("gillespie.csv"), "{msg}");
    assert!(msg.contains("oops"), "{msg}");
    assert!(!output.exists());
}
