//! Phase 4 tests: command implementations end to end.

use std::io::Cursor;

use classic_algorithms::cli::commands::{
    cmd_bfs_list, cmd_bfs_matrix, cmd_convert, cmd_hash, cmd_multiply, cmd_slice, cmd_sort,
    HashStrategy,
};
use classic_algorithms::matrix::{LoopOrder, SliceDirection};
use classic_algorithms::types::AlgoError;

// ==================== Helper ====================

fn run<F>(input: &str, f: F) -> String
where
    F: FnOnce(Cursor<Vec<u8>>, &mut Vec<u8>) -> classic_algorithms::AlgoResult<()>,
{
    let mut out = Vec::new();
    f(Cursor::new(input.as_bytes().to_vec()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ==================== Graph Commands ====================

#[test]
fn test_bfs_list_text() {
    let out = run("3\n1 1\n1 2\n0\n", |i, o| cmd_bfs_list(i, o, false));
    assert_eq!(out, "BFS order: 0 1 2\nComponents: 1\n");
}

#[test]
fn test_bfs_list_json() {
    let out = run("2\n0\n0\n", |i, o| cmd_bfs_list(i, o, true));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["order"], serde_json::json!([0, 1]));
    assert_eq!(v["component_count"], 2);
}

#[test]
fn test_bfs_matrix_text() {
    let out = run("3\n0 0 1\n0 0 0\n0 1 0\n", |i, o| cmd_bfs_matrix(i, o, false));
    assert_eq!(out, "BFS order: 0 2 1\nComponents: 1\n");
}

#[test]
fn test_convert_output_feeds_bfs_list() {
    let matrix = "3\n0 1 0\n0 0 1\n0 0 0\n";
    let list = run(matrix, |i, o| cmd_convert(i, o, false));
    assert_eq!(list, "3\n1 1\n1 2\n0\n");
    let out = run(&list, |i, o| cmd_bfs_list(i, o, false));
    assert_eq!(out, "BFS order: 0 1 2\nComponents: 1\n");
}

#[test]
fn test_bfs_list_bad_input() {
    let mut out = Vec::new();
    let err = cmd_bfs_list(Cursor::new(b"2\n1 7\n0".to_vec()), &mut out, false).unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
    assert!(out.is_empty());
}

#[test]
fn test_convert_skips_non_unit_cells() {
    let out = run("2\n0 2\n0 0", |i, o| cmd_convert(i, o, false));
    assert_eq!(out, "2\n0\n0\n");
}

#[test]
fn test_bfs_matrix_huge_size() {
    let mut out = Vec::new();
    let err = cmd_bfs_matrix(Cursor::new(b"5000000000".to_vec()), &mut out, false).unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
}

// ==================== Hash Commands ====================

#[test]
fn test_hash_chaining_text() {
    let out = run("3\n31 1 1000\n2\n31 5\n", |i, o| {
        cmd_hash(i, o, HashStrategy::Chaining, false)
    });
    assert_eq!(out, "Is value 31 present: true\nIs value 5 present: false\n");
}

#[test]
fn test_hash_linear_json() {
    let out = run("2\n0 1000\n1\n1000\n", |i, o| {
        cmd_hash(i, o, HashStrategy::LinearProbing, true)
    });
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["strategy"], "linear");
    assert_eq!(v["entries"], 2);
    assert_eq!(v["queries"][0]["present"], true);
}

#[test]
fn test_hash_strategy_names() {
    assert_eq!(HashStrategy::from_name("linear"), Some(HashStrategy::LinearProbing));
    assert_eq!(HashStrategy::from_name("chaining"), Some(HashStrategy::Chaining));
    assert_eq!(HashStrategy::from_name("cuckoo"), None);
}

// ==================== Matrix and Sort Commands ====================

#[test]
fn test_multiply_text() {
    let out = run("2\n1 2\n3 4\n5 6\n7 8\n", |i, o| {
        cmd_multiply(i, o, LoopOrder::Jki, false)
    });
    assert_eq!(out, "19 22 \n43 50 \n");
}

#[test]
fn test_multiply_rejects_bad_sizes_and_overflow() {
    for text in ["5000000000", "3\n1 2 3", "1 9999999999 9999999999"] {
        let mut out = Vec::new();
        let input = Cursor::new(text.as_bytes().to_vec());
        let err = cmd_multiply(input, &mut out, LoopOrder::Ijk, false).unwrap_err();
        assert!(matches!(err, AlgoError::InvalidInput(_)), "input {:?}", text);
        assert!(out.is_empty());
    }
}

#[test]
fn test_slice_rejects_huge_size() {
    let mut out = Vec::new();
    let err = cmd_slice(
        Cursor::new(b"5000000000".to_vec()),
        &mut out,
        SliceDirection::Column,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
}

#[test]
fn test_hash_huge_counts() {
    let mut out = Vec::new();
    let err = cmd_hash(
        Cursor::new(b"0 4000000000000000000".to_vec()),
        &mut out,
        HashStrategy::Chaining,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AlgoError::InvalidInput(_)));
}

#[test]
fn test_slice_columns() {
    let out = run("2", |i, o| cmd_slice(i, o, SliceDirection::Column, false));
    assert_eq!(out, "100 200\n101 201\n");
}

#[test]
fn test_slice_default_size() {
    let out = run("", |i, o| cmd_slice(i, o, SliceDirection::Row, false));
    assert_eq!(out.lines().count(), 100);
    assert!(out.starts_with("100 101 102"));
}

#[test]
fn test_sort_text() {
    let out = run("5", |i, o| cmd_sort(i, o, false));
    assert_eq!(out, "After sorting the list is:\n1 2 3 4 5\n");
}
