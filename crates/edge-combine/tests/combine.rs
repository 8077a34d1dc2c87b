//! End-to-end tests for `combine_edge_folder`.

use std::fs;
use std::path::Path;

use edge_combine::io::read_edge_file;
use edge_combine::{combine_edge_folder, combine_with_options, CombineOptions, EdgeError, SortMode};
use ndarray::{array, s};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn fixture(dir: &Path) {
    write(dir, "b_small.edge", "1\n");
    write(dir, "A_mid.edge", "0 2\n2 0\n");
    write(dir, "c_big.edge", "0 1 1\n1 0 1\n1 1 0\n");
}

#[test]
fn combines_by_size_into_total_edge() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let report = combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap();
    assert_eq!(report.output_path, dir.path().join("total.edge"));
    assert_eq!(report.dimension, 6);
    let order: Vec<_> = report.blocks.iter().map(|b| (b.name.as_str(), b.offset)).collect();
    assert_eq!(
        order,
        vec![("c_big.edge", 0), ("A_mid.edge", 3), ("b_small.edge", 5)]
    );

    let combined = read_edge_file(&report.output_path).unwrap();
    assert_eq!(combined.dim(), (6, 6));
    assert_eq!(
        combined.slice(s![0..3, 0..3]),
        array![[0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]]
    );
    assert_eq!(combined.slice(s![3..5, 3..5]), array![[0.0, 2.0], [2.0, 0.0]]);
    assert_eq!(combined[(5, 5)], 1.0);
    assert_eq!(combined.sum(), 6.0 + 4.0 + 1.0);

    let first_line = fs::read_to_string(&report.output_path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    assert_eq!(first_line, "0.00000 1.00000 1.00000 0.00000 0.00000 0.00000");
}

#[test]
fn combines_alphabetically() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let report = combine_edge_folder(dir.path(), "total.edge", 2, SortMode::Alphabetical).unwrap();
    let order: Vec<_> = report.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(order, vec!["A_mid.edge", "b_small.edge", "c_big.edge"]);

    let combined = read_edge_file(&report.output_path).unwrap();
    assert_eq!(combined[(0, 1)], 2.0);
    assert_eq!(combined[(2, 2)], 1.0);
    assert_eq!(combined[(3, 4)], 1.0);
}

#[test]
fn single_matrix_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "only.edge", "0.5 0.25\n0.125 1\n");

    let report = combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap();
    let combined = read_edge_file(&report.output_path).unwrap();
    assert_eq!(combined, array![[0.5, 0.25], [0.125, 1.0]]);
}

#[test]
fn rerun_does_not_consume_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap();
    let first = fs::read_to_string(dir.path().join("total.edge")).unwrap();

    let report = combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap();
    assert_eq!(report.dimension, 6);
    assert_eq!(report.blocks.len(), 3);
    assert_eq!(fs::read_to_string(dir.path().join("total.edge")).unwrap(), first);
}

#[test]
fn custom_output_name_is_excluded_and_written() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(dir.path(), "merged.edge", "9 9 9 9\n");

    let options = CombineOptions::new("merged.edge", 3, SortMode::Alphabetical);
    let report = combine_with_options(dir.path(), &options).unwrap();
    assert_eq!(report.dimension, 6);
    assert!(!dir.path().join("total.edge").exists());
    assert!(fs::read_to_string(dir.path().join("merged.edge"))
        .unwrap()
        .starts_with("0.000 2.000 "));
}

#[test]
fn empty_folder_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "total.edge", "1\n");

    let err = combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap_err();
    let edge_err = err.downcast_ref::<EdgeError>().unwrap();
    assert!(matches!(edge_err, EdgeError::EmptyInput(_)));
    assert_eq!(edge_err.path(), Some(&dir.path().to_path_buf()));
}

#[test]
fn non_square_input_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(dir.path(), "broken.edge", "1 0 0\n0 1 0 0\n0 0 1\n");

    let err = combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap_err();
    assert!(err.to_string().contains("broken.edge"));
    assert!(!dir.path().join("total.edge").exists());
}

#[test]
fn non_square_input_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(dir.path(), "total.edge", "previous\n");
    write(dir.path(), "wide.edge", "1 2\n");

    let err = combine_edge_folder(dir.path(), "total.edge", 5, SortMode::Size).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EdgeError>(),
        Some(EdgeError::Shape { rows: 1, cols: 2, .. })
    ));
    assert_eq!(
        fs::read_to_string(dir.path().join("total.edge")).unwrap(),
        "previous\n"
    );
}

#[test]
fn output_name_with_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let err = combine_edge_folder(dir.path(), "nested/total.edge", 5, SortMode::Size).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EdgeError>(),
        Some(EdgeError::InvalidOutputName(_))
    ));
}

#[test]
fn default_options() {
    let options = CombineOptions::default();
    assert_eq!(options.output_name, "total.edge");
    assert_eq!(options.precision, 5);
    assert_eq!(options.sort_mode, SortMode::Size);
}
