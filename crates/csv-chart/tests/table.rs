// File: crates/csv-chart/tests/table.rs
// Purpose: CSV loading: column order, missing values, malformed input.

use csv_chart::{Error, Table};

#[test]
fn loads_columns_in_header_order() {
    let csv = "A,B,t\n1,10,0.0\n2,20,0.5\n3,30,1.0\n";
    let table = Table::from_reader(csv.as_bytes()).expect("parse");

    assert_eq!(table.ncols(), 3);
    assert_eq!(table.nrows(), 3);
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "t"]);
    assert_eq!(table.column("B").unwrap().values, vec![10.0, 20.0, 30.0]);
    assert!(table.column("missing").is_none());
}

#[test]
fn split_last_separates_x_column() {
    let table = Table::from_reader("A,B,t\n1,2,3\n".as_bytes()).unwrap();
    let (x, ys) = table.split_last().unwrap();
    assert_eq!(x.name, "t");
    assert_eq!(ys.len(), 2);
    assert_eq!(ys[0].name, "A");
}

#[test]
fn trims_headers_and_cells() {
    let table = Table::from_reader(" A , t \n 1.5 , 2 \n".as_bytes()).unwrap();
    assert_eq!(table.columns()[0].name, "A");
    assert_eq!(table.columns()[1].name, "t");
    assert_eq!(table.columns()[0].values, vec![1.5]);
}

#[test]
fn blank_cells_are_nan() {
    let table = Table::from_reader("A,t\n,0\n4,1\n".as_bytes()).unwrap();
    let a = &table.column("A").unwrap().values;
    assert!(a[0].is_nan());
    assert_eq!(a[1], 4.0);
}

#[test]
fn duplicate_headers_get_suffixes() {
    let table = Table::from_reader("X,X,t\n1,2,3\n".as_bytes()).unwrap();
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["X", "X.1", "t"]);
}

#[test]
fn header_only_file_has_no_rows() {
    let table = Table::from_reader("A,B,t\n".as_bytes()).unwrap();
    assert_eq!(table.ncols(), 3);
    assert_eq!(table.nrows(), 0);
}

#[test]
fn non_numeric_cell_is_reported() {
    let err = Table::from_reader("A,t\n1,0\nabc,1\n".as_bytes()).unwrap_err();
    match err {
        Error::NonNumeric { column, row, value } => {
            assert_eq!(column, "A");
            assert_eq!(row, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_row_is_rejected() {
    let err = Table::from_reader("A,B,t\n1,2,3\n4,5\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Csv(_)), "got {err}");
}

#[test]
fn missing_file_is_reported() {
    let err = Table::from_path("target/test_out/definitely_missing.csv").unwrap_err();
    // The csv crate reports open failures through its own error type.
    match err {
        Error::Csv(e) => assert!(matches!(e.kind(), csv::ErrorKind::Io(_)), "got {e}"),
        other => panic!("unexpected error: {other}"),
    }
}
