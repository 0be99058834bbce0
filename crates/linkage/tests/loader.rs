//! Tests for reading the initial clusters.

use linkage::{loader, ErrorKind, LinkageError};
use test_case::test_case;

mod common;

fn kind_of(input: &str) -> Option<ErrorKind> {
    loader::load_str(input).err().map(|e| e.kind())
}

#[test]
fn singletons_in_input_order() {
    let input = "count=4\n40 86 663\n43 747 938\n47 285 973\n\n49 548 422.5\n";
    let clusters = loader::load_str(input).unwrap_or_else(|e| unreachable!("{e}"));

    assert_eq!(clusters.len(), 4);
    assert!(clusters.iter().all(|c| c.len() == 1));
    assert_eq!(common::data_gen::ids(&clusters), vec![vec![40], vec![43], vec![47], vec![49]]);

    let last = clusters.get(3).and_then(|c| c.points().first().copied());
    let last = last.unwrap_or_else(|| unreachable!());
    assert_eq!((last.x(), last.y()), (548.0, 422.5));
}

#[test]
fn extra_lines_are_ignored() {
    let clusters = loader::load_str("count=2\n1 1 1\n2 2 2\n3 3 3\nnot an object\n")
        .unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(common::data_gen::ids(&clusters), vec![vec![1], vec![2]]);
}

#[test]
fn empty_count() {
    let clusters = loader::load_str("count=0\n").unwrap_or_else(|e| unreachable!("{e}"));
    assert!(clusters.is_empty());
}

#[test_case("" ; "empty input")]
#[test_case("3\n1 1 1\n" ; "missing key")]
#[test_case("count=three\n" ; "not a number")]
#[test_case("count=-2\n" ; "negative")]
#[test_case("objects=2\n1 1 1\n2 2 2\n" ; "wrong key")]
fn malformed_header(input: &str) {
    assert_eq!(kind_of(input), Some(ErrorKind::MalformedHeader));
}

#[test_case("count=1\n1 2\n" ; "too few fields")]
#[test_case("count=1\n1 2 3 4\n" ; "too many fields")]
#[test_case("count=1\none 2 3\n" ; "bad id")]
#[test_case("count=1\n1.5 2 3\n" ; "fractional id")]
#[test_case("count=1\n1 2 y\n" ; "bad coordinate")]
fn malformed_record(input: &str) {
    assert_eq!(kind_of(input), Some(ErrorKind::MalformedRecord));
}

#[test]
fn malformed_record_reports_line() {
    let err = loader::load_str("count=3\n1 1 1\n2 2 2\n3 x 3\n").err();
    match err {
        Some(LinkageError::MalformedRecord { line, content }) => {
            assert_eq!(line, 4);
            assert_eq!(content, "3 x 3");
        }
        other => unreachable!("{other:?}"),
    }
}

#[test]
fn duplicate_id() {
    let err = loader::load_str("count=3\n7 1 1\n8 2 2\n7 3 3\n").err();
    assert!(matches!(err, Some(LinkageError::DuplicateId(7))), "{err:?}");
}

#[test_case("1000", true ; "upper bound")]
#[test_case("0", true ; "lower bound")]
#[test_case("1000.0001", false ; "just above")]
#[test_case("-0.5", false ; "negative")]
#[test_case("NaN", false ; "nan")]
#[test_case("inf", false ; "infinite")]
fn coordinate_range(value: &str, accepted: bool) {
    let x = format!("count=2\n1 {value} 5\n2 5 5\n");
    let y = format!("count=2\n1 5 5\n2 5 {value}\n");

    for input in [x, y] {
        let result = loader::load_str(&input);
        if accepted {
            assert!(result.is_ok(), "{result:?}");
        } else {
            assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::CoordinateOutOfRange));
        }
    }
}

#[test]
fn truncated() {
    let err = loader::load_str("count=5\n1 1 1\n2 2 2\n3 3 3\n").err();
    assert!(
        matches!(err, Some(LinkageError::TruncatedInput { expected: 5, found: 3 })),
        "{err:?}"
    );
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("missing 2 objects: count=5, given=3".to_string())
    );
}

#[test]
fn from_file() {
    let points = common::data_gen::random_points(25, 5);
    let dir = tempdir::TempDir::new("linkage").unwrap_or_else(|e| unreachable!("{e}"));
    let path = dir.path().join("objects.txt");
    std::fs::write(&path, common::data_gen::to_input(&points)).unwrap_or_else(|e| unreachable!("{e}"));

    let clusters = loader::load_path(&path).unwrap_or_else(|e| unreachable!("{e}"));
    let expected = points.iter().map(|p| vec![p.id()]).collect::<Vec<_>>();
    assert_eq!(common::data_gen::ids(&clusters), expected);

    for (c, p) in clusters.iter().zip(&points) {
        assert_eq!(c.points(), &[*p]);
    }
}

#[test]
fn missing_file() {
    let dir = tempdir::TempDir::new("linkage").unwrap_or_else(|e| unreachable!("{e}"));
    let path = dir.path().join("does-not-exist.txt");

    match loader::load_path(&path) {
        Err(LinkageError::FileUnavailable { path: Some(p), .. }) => assert_eq!(p, path),
        other => unreachable!("{other:?}"),
    }
}
