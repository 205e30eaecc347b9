use bcisort::prelude::*;

// Simulate records owned by another crate, keyed by a non-negative field.
#[derive(Clone, Debug, PartialEq)]
struct Reading {
    sensor: &'static str,
    bucket: u16,
}

#[test]
fn test_external_records_by_key() {
    let readings = vec![
        Reading { sensor: "foo", bucket: 3 },
        Reading { sensor: "bar", bucket: 1 },
        Reading { sensor: "baz", bucket: 3 },
        Reading { sensor: "qux", bucket: 0 },
    ];

    let sorted = counting_sort_by_key(&readings, |r| i64::from(r.bucket)).unwrap();
    let names: Vec<&str> = sorted.iter().map(|r| r.sensor).collect();

    // foo stays ahead of baz: equal buckets keep input order.
    assert_eq!(names, vec!["qux", "bar", "foo", "baz"]);
}

#[test]
fn test_bci_on_other_ord_types() {
    let mut chars = vec!['d', 'a', 'c', 'b'];
    bci_sort_all(&mut chars);
    assert_eq!(chars, vec!['a', 'b', 'c', 'd']);

    let mut pairs = vec![(2, 1), (1, 9), (2, 0), (1, 3)];
    bci_sort_all(&mut pairs);
    assert_eq!(pairs, vec![(1, 3), (1, 9), (2, 0), (2, 1)]);
}
